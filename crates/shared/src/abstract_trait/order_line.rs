use crate::{
    domain::requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    domain::responses::{ApiResponse, OrderLineResponse},
    errors::{RepositoryError, ServiceError},
    model::OrderLine,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderLineRepository = Arc<dyn OrderLineRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderLineRepositoryTrait: Send + Sync {
    /// Inserts the whole batch inside one transaction.
    async fn create_many(
        &self,
        inputs: &[CreateOrderLineRequest],
    ) -> Result<Vec<OrderLine>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderLine>, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        patch: &UpdateOrderLineRequest,
    ) -> Result<Option<OrderLine>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

pub type DynOrderLineService = Arc<dyn OrderLineServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderLineServiceTrait: Send + Sync {
    async fn create_order_lines(
        &self,
        inputs: &[CreateOrderLineRequest],
    ) -> Result<ApiResponse<Vec<OrderLineResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<OrderLineResponse>, ServiceError>;
    async fn update_order_line(
        &self,
        id: i64,
        patch: &UpdateOrderLineRequest,
    ) -> Result<ApiResponse<OrderLineResponse>, ServiceError>;
    async fn delete_order_line(&self, id: i64) -> Result<(), ServiceError>;
}
