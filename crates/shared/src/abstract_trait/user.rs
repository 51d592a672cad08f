use crate::{
    domain::requests::{LoginRequest, RegisterRequest, ResetPasswordRequest},
    domain::responses::{ApiResponse, TokenResponse, UserResponse},
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, RepositoryError>;
    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, RepositoryError>;
}

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError>;
    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    /// Seeds the admin account on first boot so the API is reachable.
    async fn ensure_admin(&self, password: &str) -> Result<(), ServiceError>;
}
