pub mod admin;
pub mod jwt;
pub mod rate_limit;
pub mod validate;

pub use self::admin::admin_middleware;
pub use self::jwt::{AuthUser, auth_middleware};
pub use self::rate_limit::rate_limit;
pub use self::validate::{ValidatedJson, ValidatedJsonList, ValidatedQuery};
