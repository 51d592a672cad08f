use crate::{
    abstract_trait::UserRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

const USER_COLUMNS: &str = "id, username, password, role, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO users (username, password, role, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .bind(password_hash)
            .bind(role)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to create user {}: {:?}", username, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Created user ID {} ({})", user.id, user.username);
        Ok(user)
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE users
            SET password = $2,
                updated_at = current_timestamp
            WHERE username = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .bind(password_hash)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to reset password for {}: {:?}", username, e);
                RepositoryError::from(e)
            })?;

        Ok(user)
    }
}
