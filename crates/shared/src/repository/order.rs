use crate::{
    abstract_trait::OrderRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::Order,
};
use async_trait::async_trait;
use tracing::{error, info};

const ORDER_COLUMNS: &str = "id, customer, total, lines_id, cashout_number, created_at, updated_at";

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn create(&self, input: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO orders (customer, total, lines_id, cashout_number, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(&input.customer)
            .bind(input.total)
            .bind(&input.lines_id)
            .bind(input.cashout_number)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create order for {}: {:?}", input.customer, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Created order ID {}", order.id);
        Ok(order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(order)
    }

    async fn update(
        &self,
        id: i64,
        patch: &UpdateOrderRequest,
    ) -> Result<Option<Order>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE orders
            SET customer = COALESCE($2, customer),
                total = COALESCE($3, total),
                lines_id = COALESCE($4, lines_id),
                cashout_number = COALESCE($5, cashout_number),
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(&patch.customer)
            .bind(patch.total)
            .bind(&patch.lines_id)
            .bind(patch.cashout_number)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if order.is_some() {
            info!("🔄 Updated order ID {}", id);
        }

        Ok(order)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
