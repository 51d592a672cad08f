mod api;
mod order;
mod order_line;
mod product;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination, Pagination};
pub use self::order::OrderResponse;
pub use self::order_line::OrderLineResponse;
pub use self::product::ProductResponse;
pub use self::user::{TokenResponse, UserResponse};
