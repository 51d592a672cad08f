mod order;
mod order_line;
mod product;
mod user;

pub use self::order::Order;
pub use self::order_line::OrderLine;
pub use self::product::Product;
pub use self::user::User;
