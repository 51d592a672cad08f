use redis::{Commands, Connection};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Fixed-window counter in Redis, one key per client.
#[derive(Clone)]
pub struct RateLimiter {
    pub redis: Arc<redis::Client>,
}

impl RateLimiter {
    pub fn new(redis: redis::Client) -> Self {
        Self {
            redis: Arc::new(redis),
        }
    }

    fn get_conn(&self) -> Option<Connection> {
        match self.redis.get_connection() {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection: {:?}", e);
                None
            }
        }
    }

    pub fn check_rate_limit(&self, key: &str, max_requests: u32, window_seconds: u32) -> (bool, u32) {
        let mut conn = match self.get_conn() {
            Some(conn) => conn,
            None => {
                // Fail open: a Redis outage must not turn every request
                // into a 429.
                warn!("Rate limiter skipping check, Redis unreachable");
                return (true, 0);
            }
        };

        let current: u32 = conn.get(key).unwrap_or(0);

        if current >= max_requests {
            debug!("Rate limit exceeded for key: {key}");
            return (false, current);
        }

        let _ = redis::pipe()
            .atomic()
            .cmd("INCR")
            .arg(key)
            .ignore()
            .cmd("EXPIRE")
            .arg(key)
            .arg(window_seconds)
            .ignore()
            .query::<()>(&mut conn);

        (true, current + 1)
    }
}
