use crate::{
    abstract_trait::{
        DynAuthService, DynCacheStore, DynHashing, DynJwtService, DynOrderLineRepository,
        DynOrderLineService, DynOrderRepository, DynOrderService, DynProductRepository,
        DynProductService, DynUserRepository,
    },
    cache::CacheStore,
    config::{ConnectionPool, RedisClient},
    repository::{OrderLineRepository, OrderRepository, ProductRepository, UserRepository},
    service::{AuthService, OrderLineService, OrderService, ProductService},
};
use anyhow::Result;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_service: DynProductService,
    pub order_service: DynOrderService,
    pub order_line_service: DynOrderLineService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .field("order_line_service", &"<OrderLineService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub redis: RedisClient,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            hash,
            jwt_config,
            redis,
        } = deps;

        let user_repository = Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let order_repository = Arc::new(OrderRepository::new(pool.clone())) as DynOrderRepository;
        let order_line_repository =
            Arc::new(OrderLineRepository::new(pool.clone())) as DynOrderLineRepository;

        let cache = Arc::new(CacheStore::new(redis.pool.clone())) as DynCacheStore;

        let auth_service =
            Arc::new(AuthService::new(user_repository, hash, jwt_config)) as DynAuthService;
        let product_service =
            Arc::new(ProductService::new(product_repository, cache)) as DynProductService;
        let order_service = Arc::new(OrderService::new(order_repository)) as DynOrderService;
        let order_line_service =
            Arc::new(OrderLineService::new(order_line_repository)) as DynOrderLineService;

        Ok(Self {
            auth_service,
            product_service,
            order_service,
            order_line_service,
        })
    }
}
