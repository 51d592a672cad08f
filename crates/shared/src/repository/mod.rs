mod order;
mod order_line;
mod product;
mod user;

pub use self::order::OrderRepository;
pub use self::order_line::OrderLineRepository;
pub use self::product::ProductRepository;
pub use self::user::UserRepository;
