use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService, DynUserRepository},
    domain::requests::{LoginRequest, RegisterRequest, ResetPasswordRequest},
    domain::responses::{ApiResponse, TokenResponse, UserResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

const VALID_ROLES: [&str; 2] = ["admin", "cashier"];

#[derive(Clone)]
pub struct AuthService {
    user_repository: DynUserRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

impl AuthService {
    pub fn new(user_repository: DynUserRepository, hashing: DynHashing, jwt: DynJwtService) -> Self {
        Self {
            user_repository,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        info!("🔍 Login attempt for {}", req.username);

        // A missing user and a wrong password answer the same way.
        let user = self
            .user_repository
            .find_by_username(&req.username)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &req.password)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        let token = self.jwt.generate_token(user.id, &user.role, "access")?;

        info!("✅ Issued access token for user ID {}", user.id);

        Ok(ApiResponse::new(TokenResponse { token }))
    }

    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        if !VALID_ROLES.contains(&req.role.as_str()) {
            return Err(ServiceError::Validation(vec![format!(
                "Role must be one of: {}",
                VALID_ROLES.join(", ")
            )]));
        }

        if self
            .user_repository
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(ServiceError::Validation(vec![format!(
                "Username {} is already taken",
                req.username
            )]));
        }

        let hash = self.hashing.hash_password(&req.password).await?;
        let user = self
            .user_repository
            .create(&req.username, &hash, &req.role)
            .await?;

        info!("✅ Registered user {} as {}", user.username, user.role);

        Ok(ApiResponse::new(UserResponse::from(user)))
    }

    async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let hash = self.hashing.hash_password(&req.new_password).await?;

        let user = self
            .user_repository
            .update_password(&req.username, &hash)
            .await?
            .ok_or_else(|| ServiceError::NotFound("user".to_string()))?;

        info!("✅ Password reset for {}", user.username);

        Ok(ApiResponse::new(UserResponse::from(user)))
    }

    async fn ensure_admin(&self, password: &str) -> Result<(), ServiceError> {
        if self
            .user_repository
            .find_by_username("admin")
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hash = self.hashing.hash_password(password).await?;
        match self.user_repository.create("admin", &hash, "admin").await {
            Ok(user) => {
                info!("✅ Seeded admin account with ID {}", user.id);
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to seed admin account: {:?}", e);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{JwtServiceTrait, UserRepositoryTrait},
        config::{Hashing, JwtConfig},
        errors::RepositoryError,
        model::User,
    };
    use std::sync::{Arc, Mutex};

    struct StubUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl StubUserRepository {
        fn empty() -> Arc<Self> {
            Arc::new(Self {
                users: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl UserRepositoryTrait for StubUserRepository {
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn create(
            &self,
            username: &str,
            password_hash: &str,
            role: &str,
        ) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            let user = User {
                id: users.len() as i64 + 1,
                username: username.to_string(),
                password: password_hash.to_string(),
                role: role.to_string(),
                created_at: None,
                updated_at: None,
            };
            users.push(user.clone());
            Ok(user)
        }

        async fn update_password(
            &self,
            username: &str,
            password_hash: &str,
        ) -> Result<Option<User>, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            let Some(user) = users.iter_mut().find(|u| u.username == username) else {
                return Ok(None);
            };
            user.password = password_hash.to_string();
            Ok(Some(user.clone()))
        }
    }

    fn service_with(repo: Arc<StubUserRepository>) -> AuthService {
        AuthService::new(
            repo,
            Arc::new(Hashing::new()),
            Arc::new(JwtConfig::new("test-secret")),
        )
    }

    #[tokio::test]
    async fn register_then_login_issues_verifiable_token() {
        let service = service_with(StubUserRepository::empty());

        let registered = service
            .register(&RegisterRequest {
                username: "clerk".into(),
                password: "hunter2hunter2".into(),
                role: "cashier".into(),
            })
            .await
            .unwrap();
        assert_eq!(registered.data.role, "cashier");

        let response = service
            .login(&LoginRequest {
                username: "clerk".into(),
                password: "hunter2hunter2".into(),
            })
            .await
            .unwrap();

        let jwt = JwtConfig::new("test-secret");
        let claims = jwt.verify_token(&response.data.token, "access").unwrap();
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.role, "cashier");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let service = service_with(StubUserRepository::empty());

        service
            .register(&RegisterRequest {
                username: "clerk".into(),
                password: "hunter2hunter2".into(),
                role: "cashier".into(),
            })
            .await
            .unwrap();

        let wrong_password = service
            .login(&LoginRequest {
                username: "clerk".into(),
                password: "not-the-one".into(),
            })
            .await;
        let unknown_user = service
            .login(&LoginRequest {
                username: "ghost".into(),
                password: "hunter2hunter2".into(),
            })
            .await;

        assert!(matches!(wrong_password, Err(ServiceError::InvalidCredentials)));
        assert!(matches!(unknown_user, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let service = service_with(StubUserRepository::empty());

        let req = RegisterRequest {
            username: "clerk".into(),
            password: "hunter2hunter2".into(),
            role: "cashier".into(),
        };
        service.register(&req).await.unwrap();

        assert!(matches!(
            service.register(&req).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn unknown_role_is_rejected() {
        let service = service_with(StubUserRepository::empty());

        let result = service
            .register(&RegisterRequest {
                username: "clerk".into(),
                password: "hunter2hunter2".into(),
                role: "superuser".into(),
            })
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn reset_password_replaces_the_stored_hash() {
        let repo = StubUserRepository::empty();
        let service = service_with(repo.clone());

        service
            .register(&RegisterRequest {
                username: "clerk".into(),
                password: "hunter2hunter2".into(),
                role: "cashier".into(),
            })
            .await
            .unwrap();

        service
            .reset_password(&ResetPasswordRequest {
                username: "clerk".into(),
                new_password: "freshfresh1".into(),
            })
            .await
            .unwrap();

        service
            .login(&LoginRequest {
                username: "clerk".into(),
                password: "freshfresh1".into(),
            })
            .await
            .unwrap();

        let stale = service
            .login(&LoginRequest {
                username: "clerk".into(),
                password: "hunter2hunter2".into(),
            })
            .await;
        assert!(matches!(stale, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn ensure_admin_is_idempotent() {
        let repo = StubUserRepository::empty();
        let service = service_with(repo.clone());

        service.ensure_admin("bootstrap-secret").await.unwrap();
        service.ensure_admin("bootstrap-secret").await.unwrap();

        assert_eq!(repo.users.lock().unwrap().len(), 1);
        assert_eq!(repo.users.lock().unwrap()[0].role, "admin");
    }
}
