use crate::middleware::jwt::AuthUser;
use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;
use tracing::warn;

/// Runs after `auth_middleware`; the identity must already be in extensions.
pub async fn admin_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let Some(user) = req.extensions().get::<AuthUser>() else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new(
                "You are not logged in, please provide token",
            )),
        ));
    };

    if !user.is_admin() {
        warn!("Admin route denied for user ID {}", user.user_id);
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Admin role required")),
        ));
    }

    Ok(next.run(req).await)
}
