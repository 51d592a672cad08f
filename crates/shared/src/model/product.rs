use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in cents, VAT included.
    pub price: i64,
    /// VAT rate in basis points (2100 for 21.00%).
    pub vat: i32,
    /// Stock quantity, fixed at two decimal places.
    pub stock: Decimal,
    pub barcode_number: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
