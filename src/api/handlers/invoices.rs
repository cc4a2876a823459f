use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::api::error::AppError;
use crate::models::{Invoice, LineItem};

#[derive(Debug, Deserialize)]
pub struct InvoicesQuery {
    pub status: Option<String>,
    /// Inclusive lower bound on the invoice date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the invoice date
    pub end_date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
pub struct InvoicesResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Serialize, ToSchema)]
pub struct LineItemsResponse {
    pub line_items: Vec<LineItem>,
}

#[utoipa::path(
    get,
    path = "/invoices/",
    params(
        ("status" = Option<String>, Query, description = "Exact status filter"),
        ("start_date" = Option<String>, Query, description = "Inclusive lower bound on the invoice date (YYYY-MM-DD)"),
        ("end_date" = Option<String>, Query, description = "Inclusive upper bound on the invoice date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Invoices matching the filters", body = InvoicesResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<InvoicesQuery>,
) -> Json<InvoicesResponse> {
    let invoices = state
        .catalog
        .invoices()
        .iter()
        .filter(|i| query.status.as_deref().is_none_or(|s| i.status == s))
        .filter(|i| query.start_date.is_none_or(|start| i.date >= start))
        .filter(|i| query.end_date.is_none_or(|end| i.date <= end))
        .cloned()
        .collect();

    Json(InvoicesResponse { invoices })
}

#[utoipa::path(
    get,
    path = "/invoices/{invoice_id}",
    params(("invoice_id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice details", body = Invoice),
        (status = 401, description = "Missing user-id header"),
        (status = 404, description = "Invoice not found")
    ),
    tag = "catalog"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<Invoice>, AppError> {
    state
        .catalog
        .invoices()
        .iter()
        .find(|i| i.id == invoice_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/invoices/{invoice_id}/line-items",
    params(("invoice_id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Line items for the invoice", body = LineItemsResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn get_invoice_line_items(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Json<LineItemsResponse> {
    let line_items = state
        .catalog
        .line_items()
        .iter()
        .filter(|l| l.invoice_id == invoice_id)
        .cloned()
        .collect();

    Json(LineItemsResponse { line_items })
}
