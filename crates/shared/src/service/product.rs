use crate::{
    abstract_trait::{DynCacheStore, DynProductRepository, ProductServiceTrait},
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    domain::responses::{ApiResponse, ApiResponsePagination, Pagination, ProductResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Duration;
use tracing::{info, warn};

/// Every cached listing page lives under this prefix so a create can sweep
/// them all at once.
const PRODUCT_LIST_PATTERN: &str = "products_offset_*";

fn product_list_key(offset: i64, limit: i64) -> String {
    format!("products_offset_{offset}_limit_{limit}")
}

fn product_list_ttl() -> Duration {
    Duration::minutes(1)
}

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
    cache_store: DynCacheStore,
}

impl ProductService {
    pub fn new(repository: DynProductRepository, cache_store: DynCacheStore) -> Self {
        Self {
            repository,
            cache_store,
        }
    }

    /// Coarse invalidation: every cached page is dropped, not just the pages
    /// the new rows land on. Enumeration failures are tolerated; the TTL
    /// bounds staleness.
    async fn invalidate_list_cache(&self) {
        let keys = self.cache_store.keys_matching(PRODUCT_LIST_PATTERN).await;
        for key in &keys {
            self.cache_store.delete(key).await;
        }
        info!("🧹 Invalidated {} cached product pages", keys.len());
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding products | offset: {}, limit: {}",
            req.offset, req.limit
        );

        // The count runs on every request so the pagination block always
        // reflects the current table, even when the rows come from cache.
        let total_items = self.repository.count_all().await?;
        let pagination = Pagination::new(total_items, req.offset, req.limit);

        let cache_key = product_list_key(req.offset, req.limit);

        if let Some(raw) = self.cache_store.get(&cache_key).await {
            match serde_json::from_str::<Vec<ProductResponse>>(&raw) {
                Ok(data) => {
                    info!("✅ Found {} products in cache", data.len());
                    return Ok(ApiResponsePagination { data, pagination });
                }
                Err(e) => {
                    warn!("Corrupt cache entry for '{}', refetching: {:?}", cache_key, e);
                }
            }
        }

        let products = self
            .repository
            .find_all(req.offset, req.limit)
            .await?;

        let data: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        let payload = serde_json::to_string(&data)
            .map_err(|e| ServiceError::Internal(format!("Failed to serialize products: {e}")))?;

        self.cache_store
            .set(&cache_key, &payload, product_list_ttl())
            .await?;

        info!("✅ Found {} products (total: {total_items})", data.len());

        Ok(ApiResponsePagination { data, pagination })
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("product".to_string()))?;

        Ok(ApiResponse::new(ProductResponse::from(product)))
    }

    async fn create_products(
        &self,
        inputs: &[CreateProductRequest],
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let created = self.repository.create_many(inputs).await?;

        self.invalidate_list_cache().await;

        let data = created.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::new(data))
    }

    async fn update_product(
        &self,
        id: i64,
        patch: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| ServiceError::NotFound("product".to_string()))?;

        Ok(ApiResponse::new(ProductResponse::from(product)))
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ServiceError::NotFound("product".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{CacheStoreTrait, ProductRepositoryTrait},
        errors::{CacheError, RepositoryError},
        model::Product,
    };
    use rust_decimal::Decimal;
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    struct StubProductRepository {
        products: Mutex<Vec<Product>>,
        find_all_calls: AtomicUsize,
    }

    impl StubProductRepository {
        fn with_products(products: Vec<Product>) -> Arc<Self> {
            Arc::new(Self {
                products: Mutex::new(products),
                find_all_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl ProductRepositoryTrait for StubProductRepository {
        async fn count_all(&self) -> Result<i64, RepositoryError> {
            Ok(self.products.lock().unwrap().len() as i64)
        }

        async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError> {
            self.find_all_calls.fetch_add(1, Ordering::SeqCst);
            let products = self.products.lock().unwrap();
            Ok(products
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
            Ok(self
                .products
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn create_many(
            &self,
            inputs: &[CreateProductRequest],
        ) -> Result<Vec<Product>, RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let mut created = Vec::new();
            for input in inputs {
                let product = Product {
                    id: products.len() as i64 + 1,
                    name: input.name.clone(),
                    price: input.price,
                    vat: input.vat,
                    stock: input.stock,
                    barcode_number: input.barcode_number.clone(),
                    created_at: None,
                    updated_at: None,
                };
                products.push(product.clone());
                created.push(product);
            }
            Ok(created)
        }

        async fn update(
            &self,
            id: i64,
            patch: &UpdateProductRequest,
        ) -> Result<Option<Product>, RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let Some(product) = products.iter_mut().find(|p| p.id == id) else {
                return Ok(None);
            };
            if let Some(name) = &patch.name {
                product.name = name.clone();
            }
            if let Some(price) = patch.price {
                product.price = price;
            }
            if let Some(vat) = patch.vat {
                product.vat = vat;
            }
            if let Some(stock) = patch.stock {
                product.stock = stock;
            }
            if let Some(barcode) = &patch.barcode_number {
                product.barcode_number = barcode.clone();
            }
            Ok(Some(product.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
            let mut products = self.products.lock().unwrap();
            let before = products.len();
            products.retain(|p| p.id != id);
            Ok(products.len() < before)
        }
    }

    struct MemoryCache {
        entries: Mutex<HashMap<String, String>>,
        fail_set: bool,
    }

    impl MemoryCache {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(HashMap::new()),
                fail_set: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                entries: Mutex::new(HashMap::new()),
                fail_set: true,
            })
        }
    }

    #[async_trait]
    impl CacheStoreTrait for MemoryCache {
        async fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        async fn set(
            &self,
            key: &str,
            value: &str,
            _expiration: Duration,
        ) -> Result<(), CacheError> {
            if self.fail_set {
                return Err(CacheError::Pool("connection refused".to_string()));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn keys_matching(&self, pattern: &str) -> Vec<String> {
            let prefix = pattern.trim_end_matches('*');
            self.entries
                .lock()
                .unwrap()
                .keys()
                .filter(|k| k.starts_with(prefix))
                .cloned()
                .collect()
        }

        async fn delete(&self, key: &str) {
            self.entries.lock().unwrap().remove(key);
        }
    }

    fn widget(id: i64) -> Product {
        Product {
            id,
            name: format!("Widget {id}"),
            price: 999,
            vat: 2100,
            stock: Decimal::new(1000, 2),
            barcode_number: format!("bc-{id}"),
            created_at: None,
            updated_at: None,
        }
    }

    fn list_request() -> FindAllProducts {
        FindAllProducts {
            offset: 0,
            limit: 10,
        }
    }

    #[tokio::test]
    async fn repeated_list_hits_cache() {
        let repo = StubProductRepository::with_products(vec![widget(1), widget(2)]);
        let service = ProductService::new(repo.clone(), MemoryCache::new());

        let first = service.find_all(&list_request()).await.unwrap();
        let second = service.find_all(&list_request()).await.unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_invalidates_every_cached_page() {
        let repo = StubProductRepository::with_products(vec![widget(1)]);
        let service = ProductService::new(repo.clone(), MemoryCache::new());

        service.find_all(&list_request()).await.unwrap();
        service
            .find_all(&FindAllProducts {
                offset: 10,
                limit: 10,
            })
            .await
            .unwrap();

        let input = CreateProductRequest {
            name: "Gadget".into(),
            price: 500,
            vat: 2100,
            stock: Decimal::new(100, 2),
            barcode_number: "456".into(),
        };
        service.create_products(&[input]).await.unwrap();

        let after = service.find_all(&list_request()).await.unwrap();

        // Two fills before the create, one refill after.
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 3);
        assert_eq!(after.pagination.total_items, 2);
    }

    #[tokio::test]
    async fn cache_population_failure_surfaces() {
        let repo = StubProductRepository::with_products(vec![widget(1)]);
        let service = ProductService::new(repo, MemoryCache::failing());

        let result = service.find_all(&list_request()).await;

        assert!(matches!(result, Err(ServiceError::Cache(_))));
    }

    #[tokio::test]
    async fn pagination_uses_ceiling_division() {
        let products: Vec<Product> = (1..=25).map(widget).collect();
        let repo = StubProductRepository::with_products(products);
        let service = ProductService::new(repo, MemoryCache::new());

        let response = service.find_all(&list_request()).await.unwrap();

        assert_eq!(response.pagination.total_items, 25);
        assert_eq!(response.pagination.total_pages, 3);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = StubProductRepository::with_products(vec![]);
        let service = ProductService::new(repo, MemoryCache::new());

        assert!(matches!(
            service.find_by_id(99).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_product(99).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_product(99, &UpdateProductRequest::default())
                .await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn single_field_patch_preserves_other_fields() {
        let repo = StubProductRepository::with_products(vec![widget(1)]);
        let service = ProductService::new(repo, MemoryCache::new());

        let patch = UpdateProductRequest {
            price: Some(0),
            ..Default::default()
        };
        let updated = service.update_product(1, &patch).await.unwrap();

        assert_eq!(updated.data.price, 0);
        assert_eq!(updated.data.name, "Widget 1");
        assert_eq!(updated.data.barcode_number, "bc-1");
        assert_eq!(updated.data.vat, 2100);
    }
}
