use crate::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    pub id: i64,
    pub customer: String,
    pub total: i64,
    pub lines_id: Vec<i64>,
    pub cashout_number: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            customer: value.customer,
            total: value.total,
            lines_id: value.lines_id,
            cashout_number: value.cashout_number,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
