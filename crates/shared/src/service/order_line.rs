use crate::{
    abstract_trait::{DynOrderLineRepository, OrderLineServiceTrait},
    domain::requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    domain::responses::{ApiResponse, OrderLineResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderLineService {
    repository: DynOrderLineRepository,
}

impl OrderLineService {
    pub fn new(repository: DynOrderLineRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderLineServiceTrait for OrderLineService {
    async fn create_order_lines(
        &self,
        inputs: &[CreateOrderLineRequest],
    ) -> Result<ApiResponse<Vec<OrderLineResponse>>, ServiceError> {
        let created = self.repository.create_many(inputs).await?;

        info!("✅ Created {} order lines", created.len());

        let data = created.into_iter().map(OrderLineResponse::from).collect();

        Ok(ApiResponse::new(data))
    }

    async fn find_by_id(&self, id: i64) -> Result<ApiResponse<OrderLineResponse>, ServiceError> {
        let line = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("order line".to_string()))?;

        Ok(ApiResponse::new(OrderLineResponse::from(line)))
    }

    async fn update_order_line(
        &self,
        id: i64,
        patch: &UpdateOrderLineRequest,
    ) -> Result<ApiResponse<OrderLineResponse>, ServiceError> {
        let line = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| ServiceError::NotFound("order line".to_string()))?;

        Ok(ApiResponse::new(OrderLineResponse::from(line)))
    }

    async fn delete_order_line(&self, id: i64) -> Result<(), ServiceError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ServiceError::NotFound("order line".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::OrderLineRepositoryTrait, errors::RepositoryError, model::OrderLine,
    };
    use rust_decimal::Decimal;
    use std::sync::{Arc, Mutex};

    struct StubOrderLineRepository {
        lines: Mutex<Vec<OrderLine>>,
    }

    impl StubOrderLineRepository {
        fn empty() -> Arc<Self> {
            Arc::new(Self {
                lines: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl OrderLineRepositoryTrait for StubOrderLineRepository {
        async fn create_many(
            &self,
            inputs: &[CreateOrderLineRequest],
        ) -> Result<Vec<OrderLine>, RepositoryError> {
            let mut lines = self.lines.lock().unwrap();
            let mut created = Vec::new();
            for input in inputs {
                let line = OrderLine {
                    id: lines.len() as i64 + 1,
                    product_id: input.product_id,
                    quantity: input.quantity,
                    price: input.price,
                    vat: input.vat,
                    total: input.total,
                    created_at: None,
                    updated_at: None,
                };
                lines.push(line.clone());
                created.push(line);
            }
            Ok(created)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<OrderLine>, RepositoryError> {
            Ok(self
                .lines
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.id == id)
                .cloned())
        }

        async fn update(
            &self,
            id: i64,
            patch: &UpdateOrderLineRequest,
        ) -> Result<Option<OrderLine>, RepositoryError> {
            let mut lines = self.lines.lock().unwrap();
            let Some(line) = lines.iter_mut().find(|l| l.id == id) else {
                return Ok(None);
            };
            if let Some(product_id) = patch.product_id {
                line.product_id = product_id;
            }
            if let Some(quantity) = patch.quantity {
                line.quantity = quantity;
            }
            if let Some(price) = patch.price {
                line.price = price;
            }
            if let Some(vat) = patch.vat {
                line.vat = vat;
            }
            if let Some(total) = patch.total {
                line.total = total;
            }
            Ok(Some(line.clone()))
        }

        async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
            let mut lines = self.lines.lock().unwrap();
            let before = lines.len();
            lines.retain(|l| l.id != id);
            Ok(lines.len() < before)
        }
    }

    fn line_input(product_id: i64) -> CreateOrderLineRequest {
        CreateOrderLineRequest {
            product_id,
            quantity: Decimal::new(200, 2),
            price: 999,
            vat: 2100,
            total: 1998,
        }
    }

    #[tokio::test]
    async fn bulk_create_assigns_sequential_ids() {
        let service = OrderLineService::new(StubOrderLineRepository::empty());

        let response = service
            .create_order_lines(&[line_input(1), line_input(2)])
            .await
            .unwrap();

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].id, 1);
        assert_eq!(response.data[1].id, 2);
        assert_eq!(response.data[0].quantity, Decimal::new(200, 2));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let service = OrderLineService::new(StubOrderLineRepository::empty());

        assert!(matches!(
            service.find_by_id(5).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_order_line(5).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
