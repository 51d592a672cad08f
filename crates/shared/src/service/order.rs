use crate::{
    abstract_trait::{DynOrderRepository, OrderServiceTrait},
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderService {
    repository: DynOrderRepository,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn create_order(
        &self,
        input: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        // lines_id is taken as-is: the ids are an advisory list, not checked
        // against the order_lines table.
        let order = self.repository.create(input).await?;

        info!("✅ Created order ID {}", order.id);

        Ok(ApiResponse::new(OrderResponse::from(order)))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("order".to_string()))?;

        Ok(ApiResponse::new(OrderResponse::from(order)))
    }

    async fn update_order(
        &self,
        id: i64,
        patch: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| ServiceError::NotFound("order".to_string()))?;

        Ok(ApiResponse::new(OrderResponse::from(order)))
    }

    async fn delete_order(&self, id: i64) -> Result<(), ServiceError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ServiceError::NotFound("order".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::OrderRepositoryTrait, errors::RepositoryError, model::Order};
    use std::sync::{Arc, Mutex};

    struct StubOrderRepository {
        orders: Mutex<Vec<Order>>,
    }

    impl StubOrderRepository {
        fn empty() -> Arc<Self> {
            Arc::new(Self {
                orders: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl OrderRepositoryTrait for StubOrderRepository {
        async fn create(&self, input: &CreateOrderRequest) -> Result<Order, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let order = Order {
                id: orders.len() as i64 + 1,
                customer: input.customer.clone(),
                total: input.total,
                lines_id: input.lines_id.clone(),
                cashout_number: input.cashout_number,
                created_at: None,
                updated_at: None,
            };
            orders.push(order.clone());
            Ok(order)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .find(|o| o.id == id)
                .cloned())
        }

        async fn update(
            &self,
            id: i64,
            patch: &UpdateOrderRequest,
        ) -> Result<Option<Order>, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
                return Ok(None);
            };
            if let Some(customer) = &patch.customer {
                order.customer = customer.clone();
            }
            if let Some(total) = patch.total {
                order.total = total;
            }
            if let Some(lines_id) = &patch.lines_id {
                order.lines_id = lines_id.clone();
            }
            if let Some(cashout_number) = patch.cashout_number {
                order.cashout_number = cashout_number;
            }
            Ok(Some(order.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let before = orders.len();
            orders.retain(|o| o.id != id);
            Ok(orders.len() < before)
        }
    }

    #[tokio::test]
    async fn create_echoes_input_and_assigns_id() {
        let service = OrderService::new(StubOrderRepository::empty());

        let input = CreateOrderRequest {
            customer: "counter".into(),
            total: 1998,
            lines_id: vec![3, 1, 2],
            cashout_number: 1,
        };
        let response = service.create_order(&input).await.unwrap();

        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.customer, "counter");
        // Insertion order of the line ids is preserved.
        assert_eq!(response.data.lines_id, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn operations_on_unknown_id_are_not_found() {
        let service = OrderService::new(StubOrderRepository::empty());

        assert!(matches!(
            service.find_by_id(7).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.update_order(7, &UpdateOrderRequest::default()).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_order(7).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn patch_updates_only_supplied_fields() {
        let service = OrderService::new(StubOrderRepository::empty());

        let input = CreateOrderRequest {
            customer: "counter".into(),
            total: 1998,
            lines_id: vec![1],
            cashout_number: 1,
        };
        service.create_order(&input).await.unwrap();

        let patch = UpdateOrderRequest {
            total: Some(0),
            ..Default::default()
        };
        let updated = service.update_order(1, &patch).await.unwrap();

        assert_eq!(updated.data.total, 0);
        assert_eq!(updated.data.customer, "counter");
        assert_eq!(updated.data.lines_id, vec![1]);
    }
}
