use crate::{
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    domain::responses::{ApiResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
    model::Order,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait: Send + Sync {
    async fn create(&self, input: &CreateOrderRequest) -> Result<Order, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;
    async fn update(
        &self,
        id: i64,
        patch: &UpdateOrderRequest,
    ) -> Result<Option<Order>, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait: Send + Sync {
    async fn create_order(
        &self,
        input: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: i64,
        patch: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: i64) -> Result<(), ServiceError>;
}
