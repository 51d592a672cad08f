use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default)]
    #[validate(range(min = 0, message = "Offset cannot be negative"))]
    pub offset: i64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 0, message = "Limit cannot be negative"))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

fn non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Widget")]
    pub name: String,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 999)]
    pub price: i64,

    #[validate(range(min = 0, message = "VAT cannot be negative"))]
    #[schema(example = 2100)]
    pub vat: i32,

    #[validate(custom(function = "non_negative_decimal", message = "Stock cannot be negative"))]
    #[schema(value_type = String, example = "10.00")]
    pub stock: Decimal,

    #[validate(length(min = 1, message = "Barcode number is required"))]
    #[schema(example = "123")]
    pub barcode_number: String,
}

/// Merge-patch payload: only fields present in the body overwrite the row,
/// so an explicit zero is distinguishable from an omitted field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i64>,

    #[validate(range(min = 0, message = "VAT cannot be negative"))]
    pub vat: Option<i32>,

    #[validate(custom(function = "non_negative_decimal", message = "Stock cannot be negative"))]
    #[schema(value_type = Option<String>)]
    pub stock: Option<Decimal>,

    #[validate(length(min = 1, message = "Barcode number cannot be empty"))]
    pub barcode_number: Option<String>,
}
