use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub customer: String,
    /// Order total in cents, VAT included.
    pub total: i64,
    /// Ids of the order lines belonging to this order, in insertion order.
    /// Advisory only: not backed by a foreign key.
    pub lines_id: Vec<i64>,
    pub cashout_number: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
