use crate::{abstract_trait::CacheStoreTrait, errors::CacheError};
use async_trait::async_trait;
use chrono::Duration;
use deadpool_redis::{Connection, Pool};
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct CacheStore {
    redis_pool: Arc<Pool>,
}

impl CacheStore {
    pub fn new(redis_pool: Pool) -> Self {
        Self {
            redis_pool: Arc::new(redis_pool),
        }
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.redis_pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis pooled connection: {:?}", e);
                None
            }
        }
    }
}

#[async_trait]
impl CacheStoreTrait for CacheStore {
    async fn get(&self, key: &str) -> Option<String> {
        let mut conn = self.get_conn().await?;
        let result: redis::RedisResult<Option<String>> =
            redis::cmd("GET").arg(key).query_async(&mut conn).await;

        match result {
            Ok(Some(data)) => Some(data),
            Ok(None) => {
                warn!("Cache miss for key: {key}");
                None
            }
            Err(e) => {
                error!("Redis get error for key '{}': {:?}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, expiration: Duration) -> Result<(), CacheError> {
        let mut conn = self
            .redis_pool
            .get()
            .await
            .map_err(|e| CacheError::Pool(e.to_string()))?;

        redis::pipe()
            .cmd("SET")
            .arg(key)
            .arg(value)
            .ignore()
            .cmd("EXPIRE")
            .arg(key)
            .arg(expiration.num_seconds())
            .query_async::<()>(&mut conn)
            .await?;

        debug!("Cached key '{}' with TTL {:?}", key, expiration);

        Ok(())
    }

    async fn keys_matching(&self, pattern: &str) -> Vec<String> {
        let Some(mut conn) = self.get_conn().await else {
            return Vec::new();
        };

        let result: redis::RedisResult<Vec<String>> =
            redis::cmd("KEYS").arg(pattern).query_async(&mut conn).await;

        match result {
            Ok(keys) => keys,
            Err(e) => {
                error!("Redis keys error for pattern '{}': {:?}", pattern, e);
                Vec::new()
            }
        }
    }

    async fn delete(&self, key: &str) {
        if let Some(mut conn) = self.get_conn().await
            && let Err(e) = redis::cmd("DEL")
                .arg(key)
                .query_async::<()>(&mut conn)
                .await
        {
            error!("Failed to delete key '{}': {:?}", key, e);
        }
    }
}
