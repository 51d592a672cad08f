use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = "id, name, price, vat, stock, barcode_number, created_at, updated_at";

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn count_all(&self) -> Result<i64, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to count products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(total)
    }

    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT $1 OFFSET $2"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch products: {:?}", e);
                RepositoryError::from(e)
            })?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn create_many(
        &self,
        inputs: &[CreateProductRequest],
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO products (name, price, vat, stock, barcode_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let mut created = Vec::with_capacity(inputs.len());

        for input in inputs {
            let product = sqlx::query_as::<_, Product>(&sql)
                .bind(&input.name)
                .bind(input.price)
                .bind(input.vat)
                .bind(input.stock)
                .bind(&input.barcode_number)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    error!("❌ Failed to create product {}: {:?}", input.name, e);
                    RepositoryError::from(e)
                })?;

            created.push(product);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created {} products", created.len());
        Ok(created)
    }

    async fn update(
        &self,
        id: i64,
        patch: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        // COALESCE keeps columns whose patch field was absent.
        let sql = format!(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                vat = COALESCE($4, vat),
                stock = COALESCE($5, stock),
                barcode_number = COALESCE($6, barcode_number),
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.price)
            .bind(patch.vat)
            .bind(patch.stock)
            .bind(&patch.barcode_number)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update product ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if product.is_some() {
            info!("🔄 Updated product ID {}", id);
        }

        Ok(product)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
