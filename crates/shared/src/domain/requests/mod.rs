mod auth;
mod order;
mod order_line;
mod product;

pub use self::auth::{LoginRequest, RegisterRequest, ResetPasswordRequest};
pub use self::order::{CreateOrderRequest, UpdateOrderRequest};
pub use self::order_line::{CreateOrderLineRequest, UpdateOrderLineRequest};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
