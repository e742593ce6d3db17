use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::seed::seed_database;
use crate::state::AppState;

/// GET /seed — loads the placeholder data set.
pub async fn run_seed(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Value>, AppError> {
    seed_database(&db_pool).await?;
    Ok(Json(json!({ "message": "Database seeded successfully" })))
}
