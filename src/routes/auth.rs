use axum::{routing::get, Router};

use crate::handlers::auth;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/check", get(auth::check_session))
}
