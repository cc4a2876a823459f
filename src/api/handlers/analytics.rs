use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::models::{CategorySpend, MonthlySpend, VendorSpend};

#[derive(Serialize, ToSchema)]
pub struct SpendByVendorResponse {
    pub spend_by_vendor: Vec<VendorSpend>,
}

#[derive(Serialize, ToSchema)]
pub struct SpendByCategoryResponse {
    pub spend_by_category: Vec<CategorySpend>,
}

#[derive(Serialize, ToSchema)]
pub struct MonthlySpendResponse {
    pub monthly_spend: Vec<MonthlySpend>,
}

#[utoipa::path(
    get,
    path = "/analytics/spend-by-vendor",
    responses(
        (status = 200, description = "Total spend per vendor", body = SpendByVendorResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "analytics"
)]
pub async fn get_spend_by_vendor(State(state): State<AppState>) -> Json<SpendByVendorResponse> {
    Json(SpendByVendorResponse {
        spend_by_vendor: state.catalog.spend_by_vendor(),
    })
}

#[utoipa::path(
    get,
    path = "/analytics/spend-by-category",
    responses(
        (status = 200, description = "Total spend per material category", body = SpendByCategoryResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "analytics"
)]
pub async fn get_spend_by_category(
    State(state): State<AppState>,
) -> Json<SpendByCategoryResponse> {
    Json(SpendByCategoryResponse {
        spend_by_category: state.catalog.spend_by_category(),
    })
}

#[utoipa::path(
    get,
    path = "/analytics/monthly-spend",
    responses(
        (status = 200, description = "Monthly spend trend", body = MonthlySpendResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "analytics"
)]
pub async fn get_monthly_spend(State(state): State<AppState>) -> Json<MonthlySpendResponse> {
    Json(MonthlySpendResponse {
        monthly_spend: state.catalog.monthly_spend(),
    })
}
