use crate::model::OrderLine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct OrderLineResponse {
    pub id: i64,
    pub product_id: i64,
    #[schema(value_type = String)]
    pub quantity: Decimal,
    pub price: i64,
    pub vat: i32,
    pub total: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(value: OrderLine) -> Self {
        OrderLineResponse {
            id: value.id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            vat: value.vat,
            total: value.total,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
