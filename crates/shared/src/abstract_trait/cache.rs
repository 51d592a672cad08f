use crate::errors::CacheError;
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;

pub type DynCacheStore = Arc<dyn CacheStoreTrait + Send + Sync>;

/// Key/value gateway used by the product listing read path.
///
/// Read-side failures degrade to a miss; key enumeration failures degrade to
/// an empty list. Only `set` reports its error, because a failed population
/// on the listing path must surface to the caller.
#[async_trait]
pub trait CacheStoreTrait: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str, expiration: Duration) -> Result<(), CacheError>;
    async fn keys_matching(&self, pattern: &str) -> Vec<String>;
    async fn delete(&self, key: &str);
}
