use axum::{routing::get, Router};

use crate::handlers::customer;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/customers", get(customer::list_customers))
}
