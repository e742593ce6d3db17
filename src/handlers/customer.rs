use axum::extract::{Query, State};
use axum::Json;
use std::collections::HashMap;

use crate::dtos::customer::{CustomerResponse, CustomersPageResponse};
use crate::error::AppError;
use crate::listing::customers::{
    fetch_filtered_customers, CustomerListParams, CustomerSortKey, StatusFilter,
};
use crate::listing::{normalize_page, SearchTerm, SortDirection};
use crate::state::AppState;

/// GET /api/customers?query&page&status&sort&direction
pub async fn list_customers(
    State(AppState { db_pool }): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CustomersPageResponse>, AppError> {
    let query = params.get("query").map(String::as_str).unwrap_or("");
    let list = CustomerListParams {
        term: SearchTerm::parse(query),
        page: normalize_page(params.get("page").map(String::as_str)),
        status: StatusFilter::parse(params.get("status").map(String::as_str)),
        sort: CustomerSortKey::parse(params.get("sort").map(String::as_str)),
        direction: SortDirection::parse_or(
            params.get("direction").map(String::as_str),
            SortDirection::Asc,
        ),
    };

    let page = fetch_filtered_customers(&db_pool, &list)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch customers", e))?;

    Ok(Json(CustomersPageResponse {
        customers: page.rows.into_iter().map(CustomerResponse::from).collect(),
        total_pages: page.total_pages,
    }))
}
