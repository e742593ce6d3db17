use axum::{routing::get, Router};

use crate::handlers::invoice;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(invoice::list_invoices))
        .route("/invoices/latest", get(invoice::latest_invoices))
        .route("/invoices/pages", get(invoice::invoice_pages))
        .route("/invoices/{id}", get(invoice::get_invoice))
}
