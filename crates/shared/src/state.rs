use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    cache::RateLimiter,
    config::{Config, ConnectionPool, Hashing, JwtConfig, RedisClient, RedisConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub rate_limiter: Arc<RateLimiter>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let redis_config = RedisConfig::new(
            config.redis_host.clone(),
            config.redis_port,
            config.redis_db,
            config.redis_password.clone(),
        );

        let redis = RedisClient::new(&redis_config)
            .await
            .context("Failed to connect to Redis")?;

        redis.ping().context("Failed to ping Redis server")?;

        let rate_limiter = Arc::new(RateLimiter::new(redis.client.clone()));

        let deps = DependenciesInjectDeps {
            pool,
            hash: hashing,
            jwt_config: jwt_config.clone(),
            redis,
        };

        let di_container = DependenciesInject::new(deps)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            jwt_config,
            rate_limiter,
        })
    }
}
