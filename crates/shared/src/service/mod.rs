mod auth;
mod order;
mod order_line;
mod product;

pub use self::auth::AuthService;
pub use self::order::OrderService;
pub use self::order_line::OrderLineService;
pub use self::product::ProductService;
