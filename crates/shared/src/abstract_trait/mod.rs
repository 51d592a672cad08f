mod cache;
mod hashing;
mod jwt;
mod order;
mod order_line;
mod product;
mod user;

pub use self::cache::{CacheStoreTrait, DynCacheStore};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait,
};
pub use self::order_line::{
    DynOrderLineRepository, DynOrderLineService, OrderLineRepositoryTrait, OrderLineServiceTrait,
};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::user::{
    AuthServiceTrait, DynAuthService, DynUserRepository, UserRepositoryTrait,
};
