mod cache_store;
mod rate_limit;

pub use self::cache_store::CacheStore;
pub use self::rate_limit::RateLimiter;
