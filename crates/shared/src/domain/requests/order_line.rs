use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderLineRequest {
    #[validate(range(min = 1, message = "Product id is required"))]
    #[schema(example = 1)]
    pub product_id: i64,

    #[validate(custom(function = "non_negative_decimal", message = "Quantity cannot be negative"))]
    #[schema(value_type = String, example = "2.00")]
    pub quantity: Decimal,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 999)]
    pub price: i64,

    #[validate(range(min = 0, message = "VAT cannot be negative"))]
    #[schema(example = 2100)]
    pub vat: i32,

    #[validate(range(min = 0, message = "Total cannot be negative"))]
    #[schema(example = 1998)]
    pub total: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderLineRequest {
    #[validate(range(min = 1, message = "Product id cannot be zero"))]
    pub product_id: Option<i64>,

    #[validate(custom(function = "non_negative_decimal", message = "Quantity cannot be negative"))]
    #[schema(value_type = Option<String>)]
    pub quantity: Option<Decimal>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, message = "VAT cannot be negative"))]
    pub vat: Option<i32>,

    #[validate(range(min = 0, message = "Total cannot be negative"))]
    pub total: Option<i64>,
}
