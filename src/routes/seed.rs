use axum::{routing::get, Router};

use crate::handlers::seed;
use crate::state::AppState;

/// Mounted at the root, not under /api, mirroring the original dashboard.
pub fn routes() -> Router<AppState> {
    Router::new().route("/seed", get(seed::run_seed))
}
