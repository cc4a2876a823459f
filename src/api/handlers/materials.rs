use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::models::{LowStockMaterial, Material, PricePoint};

#[derive(Debug, Deserialize)]
pub struct MaterialsQuery {
    pub category: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

#[derive(Serialize, ToSchema)]
pub struct MaterialsResponse {
    pub materials: Vec<Material>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Serialize, ToSchema)]
pub struct PriceHistoryResponse {
    pub material_id: String,
    pub price_history: Vec<PricePoint>,
}

#[derive(Serialize, ToSchema)]
pub struct LowStockResponse {
    pub low_stock_materials: Vec<LowStockMaterial>,
}

#[utoipa::path(
    get,
    path = "/materials/",
    params(
        ("category" = Option<String>, Query, description = "Exact category filter"),
        ("page" = Option<usize>, Query, description = "1-indexed page to return"),
        ("page_size" = Option<usize>, Query, description = "Entries per page")
    ),
    responses(
        (status = 200, description = "Materials filtered by category, paginated", body = MaterialsResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn list_materials(
    State(state): State<AppState>,
    Query(query): Query<MaterialsQuery>,
) -> Json<MaterialsResponse> {
    let materials: Vec<Material> = match query.category.as_deref() {
        Some(category) => state
            .catalog
            .materials()
            .iter()
            .filter(|m| m.category == category)
            .cloned()
            .collect(),
        None => state.catalog.materials().to_vec(),
    };

    let total = materials.len();
    let start = query.page.saturating_sub(1).saturating_mul(query.page_size);
    let materials = materials
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .collect();

    Json(MaterialsResponse {
        materials,
        total,
        page: query.page,
        page_size: query.page_size,
    })
}

#[utoipa::path(
    get,
    path = "/materials/price-history/{material_id}",
    params(("material_id" = String, Path, description = "Material ID")),
    responses(
        (status = 200, description = "Price history for the material", body = PriceHistoryResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn get_material_price_history(
    State(state): State<AppState>,
    Path(material_id): Path<String>,
) -> Json<PriceHistoryResponse> {
    let price_history = state.catalog.price_history(&material_id);

    Json(PriceHistoryResponse {
        material_id,
        price_history,
    })
}

#[utoipa::path(
    get,
    path = "/materials/low-stock",
    responses(
        (status = 200, description = "Materials at or below their reorder point", body = LowStockResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn get_low_stock_materials(State(state): State<AppState>) -> Json<LowStockResponse> {
    Json(LowStockResponse {
        low_stock_materials: state.catalog.low_stock(),
    })
}
