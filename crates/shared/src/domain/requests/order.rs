use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Customer is required"))]
    #[schema(example = "counter")]
    pub customer: String,

    #[validate(range(min = 0, message = "Total cannot be negative"))]
    #[schema(example = 1998)]
    pub total: i64,

    /// Order line ids, in insertion order. Advisory: not checked against the
    /// order_lines table.
    pub lines_id: Vec<i64>,

    #[validate(range(min = 0, message = "Cashout number cannot be negative"))]
    #[schema(example = 1)]
    pub cashout_number: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[validate(length(min = 1, message = "Customer cannot be empty"))]
    pub customer: Option<String>,

    #[validate(range(min = 0, message = "Total cannot be negative"))]
    pub total: Option<i64>,

    pub lines_id: Option<Vec<i64>>,

    #[validate(range(min = 0, message = "Cashout number cannot be negative"))]
    pub cashout_number: Option<i32>,
}
