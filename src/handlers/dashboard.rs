use axum::extract::State;
use axum::Json;

use crate::dtos::dashboard::CardData;
use crate::error::AppError;
use crate::listing::dashboard::{fetch_card_totals, fetch_revenue};
use crate::models::revenue::Revenue;
use crate::state::AppState;

/// GET /api/dashboard/cards — the four summary-card aggregates.
pub async fn card_data(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<CardData>, AppError> {
    let totals = fetch_card_totals(&db_pool)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch card data", e))?;

    Ok(Json(CardData::from(totals)))
}

/// GET /api/revenue — every row of the precomputed revenue table.
pub async fn list_revenue(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<Revenue>>, AppError> {
    let revenue = fetch_revenue(&db_pool)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch revenue data", e))?;

    Ok(Json(revenue))
}
