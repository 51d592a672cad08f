use crate::{
    domain::requests::{CreateProductRequest, FindAllProducts, UpdateProductRequest},
    domain::responses::{ApiResponse, ApiResponsePagination, ProductResponse},
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait: Send + Sync {
    async fn count_all(&self) -> Result<i64, RepositoryError>;
    async fn find_all(&self, offset: i64, limit: i64) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    /// Inserts the whole batch inside one transaction; either every row is
    /// visible afterwards or none is.
    async fn create_many(
        &self,
        inputs: &[CreateProductRequest],
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        patch: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait: Send + Sync {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn create_products(
        &self,
        inputs: &[CreateProductRequest],
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn update_product(
        &self,
        id: i64,
        patch: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, id: i64) -> Result<(), ServiceError>;
}
