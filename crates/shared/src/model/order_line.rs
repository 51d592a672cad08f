use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderLine {
    pub id: i64,
    pub product_id: i64,
    pub quantity: Decimal,
    /// Unit price in cents, VAT included.
    pub price: i64,
    /// VAT rate in basis points.
    pub vat: i32,
    /// Line total in cents, VAT included.
    pub total: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
