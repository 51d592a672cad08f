use crate::{
    abstract_trait::OrderLineRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderLineRequest, UpdateOrderLineRequest},
    errors::RepositoryError,
    model::OrderLine,
};
use async_trait::async_trait;
use tracing::{error, info};

const ORDER_LINE_COLUMNS: &str =
    "id, product_id, quantity, price, vat, total, created_at, updated_at";

#[derive(Clone)]
pub struct OrderLineRepository {
    db: ConnectionPool,
}

impl OrderLineRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderLineRepositoryTrait for OrderLineRepository {
    async fn create_many(
        &self,
        inputs: &[CreateOrderLineRequest],
    ) -> Result<Vec<OrderLine>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO order_lines (product_id, quantity, price, vat, total, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {ORDER_LINE_COLUMNS}
            "#
        );

        let mut created = Vec::with_capacity(inputs.len());

        for input in inputs {
            let line = sqlx::query_as::<_, OrderLine>(&sql)
                .bind(input.product_id)
                .bind(input.quantity)
                .bind(input.price)
                .bind(input.vat)
                .bind(input.total)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    error!(
                        "❌ Failed to create order line for product {}: {:?}",
                        input.product_id, e
                    );
                    RepositoryError::from(e)
                })?;

            created.push(line);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created {} order lines", created.len());
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderLine>, RepositoryError> {
        let sql = format!("SELECT {ORDER_LINE_COLUMNS} FROM order_lines WHERE id = $1");

        let line = sqlx::query_as::<_, OrderLine>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(line)
    }

    async fn update(
        &self,
        id: i64,
        patch: &UpdateOrderLineRequest,
    ) -> Result<Option<OrderLine>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE order_lines
            SET product_id = COALESCE($2, product_id),
                quantity = COALESCE($3, quantity),
                price = COALESCE($4, price),
                vat = COALESCE($5, vat),
                total = COALESCE($6, total),
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING {ORDER_LINE_COLUMNS}
            "#
        );

        let line = sqlx::query_as::<_, OrderLine>(&sql)
            .bind(id)
            .bind(patch.product_id)
            .bind(patch.quantity)
            .bind(patch.price)
            .bind(patch.vat)
            .bind(patch.total)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order line ID {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if line.is_some() {
            info!("🔄 Updated order line ID {}", id);
        }

        Ok(line)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM order_lines WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order line {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
