pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod seed;

use axum::Router;
use crate::state::AppState;

/// Everything mounted under /api.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(customers::routes())
        .merge(invoices::routes())
        .merge(dashboard::routes())
        .merge(auth::routes())
}
