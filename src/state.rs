use sqlx::PgPool;

/// Shared application state: the connection pool is created once in `main`
/// and handed to every handler through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}
