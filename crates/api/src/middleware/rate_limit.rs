use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::{cache::RateLimiter, errors::ErrorResponse};
use std::sync::Arc;
use tracing::warn;

const MAX_REQUESTS_PER_WINDOW: u32 = 60;
const WINDOW_SECONDS: u32 = 60;

pub async fn rate_limit(
    Extension(rate_limiter): Extension<Arc<RateLimiter>>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let client_ip = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let key = format!("rate_limit:{client_ip}");

    let (allowed, current) =
        rate_limiter.check_rate_limit(&key, MAX_REQUESTS_PER_WINDOW, WINDOW_SECONDS);

    if !allowed {
        warn!(
            "Rate limit exceeded for IP: {} (requests: {})",
            client_ip, current
        );
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new(
                "Too many requests, please try again later",
            )),
        ));
    }

    Ok(next.run(req).await)
}
