use axum::extract::{Path, Query, State};
use axum::Json;
use std::collections::HashMap;
use uuid::Uuid;

use crate::dtos::invoice::{InvoiceDetail, InvoiceListItem, InvoicePagesResponse, LatestInvoice};
use crate::error::AppError;
use crate::listing::invoices::{
    fetch_filtered_invoices, fetch_invoice_by_id, fetch_invoice_pages, fetch_latest_invoices,
    InvoiceListParams, InvoiceSortKey,
};
use crate::listing::{normalize_page, SearchTerm, SortDirection};
use crate::pagination::generate_pagination;
use crate::state::AppState;

/// GET /api/invoices?query&page — one page of invoices with embedded
/// customer columns, most recent first unless told otherwise.
pub async fn list_invoices(
    State(AppState { db_pool }): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<InvoiceListItem>>, AppError> {
    let query = params.get("query").map(String::as_str).unwrap_or("");
    let list = InvoiceListParams {
        term: SearchTerm::parse(query),
        page: normalize_page(params.get("page").map(String::as_str)),
        sort: InvoiceSortKey::parse(params.get("sort").map(String::as_str)),
        direction: SortDirection::parse_or(
            params.get("direction").map(String::as_str),
            SortDirection::Desc,
        ),
    };

    let rows = fetch_filtered_invoices(&db_pool, &list)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch invoices", e))?;

    Ok(Json(rows.into_iter().map(InvoiceListItem::from).collect()))
}

/// GET /api/invoices/pages?query&page — page count under the listing
/// predicate, plus the rendered pagination window.
pub async fn invoice_pages(
    State(AppState { db_pool }): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<InvoicePagesResponse>, AppError> {
    let query = params.get("query").map(String::as_str).unwrap_or("");
    let term = SearchTerm::parse(query);
    let page = normalize_page(params.get("page").map(String::as_str));

    let total_pages = fetch_invoice_pages(&db_pool, &term)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch total number of invoices", e))?;

    Ok(Json(InvoicePagesResponse {
        total_pages,
        pages: generate_pagination(page, total_pages),
    }))
}

/// GET /api/invoices/latest — the five most recent invoices.
pub async fn latest_invoices(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<LatestInvoice>>, AppError> {
    let rows = fetch_latest_invoices(&db_pool)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch the latest invoices", e))?;

    Ok(Json(rows.into_iter().map(LatestInvoice::from).collect()))
}

/// GET /api/invoices/{id}
pub async fn get_invoice(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceDetail>, AppError> {
    let invoice = fetch_invoice_by_id(&db_pool, id)
        .await
        .map_err(|e| AppError::fetch("Failed to fetch invoice", e))?
        .ok_or_else(|| AppError::not_found("Invoice not found"))?;

    Ok(Json(InvoiceDetail::from(invoice)))
}
