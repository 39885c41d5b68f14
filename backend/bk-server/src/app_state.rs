use bk_auth::JwtValidator;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` runs the service without authentication
    pub jwt_validator: Option<Arc<JwtValidator>>,
}

impl AppState {
    pub fn new(pool: SqlitePool, jwt_validator: Option<Arc<JwtValidator>>) -> Self {
        Self {
            pool,
            jwt_validator,
        }
    }
}
