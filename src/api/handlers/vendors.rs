use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;
use crate::api::error::AppError;
use crate::models::{PaymentTerms, Vendor, VendorAddress};

#[derive(Debug, Deserialize)]
pub struct VendorQuery {
    /// Case-insensitive substring match on the vendor name
    pub search: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct VendorsResponse {
    pub vendors: Vec<Vendor>,
}

#[derive(Serialize, ToSchema)]
pub struct AddressesResponse {
    pub addresses: Vec<VendorAddress>,
}

#[derive(Serialize, ToSchema)]
pub struct PaymentTermsResponse {
    pub vendor_id: String,
    pub payment_terms: PaymentTerms,
}

#[utoipa::path(
    get,
    path = "/vendors/",
    params(("search" = Option<String>, Query, description = "Case-insensitive vendor name filter")),
    responses(
        (status = 200, description = "Vendors matching the optional search", body = VendorsResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<VendorQuery>,
) -> Json<VendorsResponse> {
    let vendors = match query.search.as_deref() {
        Some(search) => {
            let needle = search.to_lowercase();
            state
                .catalog
                .vendors()
                .iter()
                .filter(|v| v.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => state.catalog.vendors().to_vec(),
    };

    Json(VendorsResponse { vendors })
}

#[utoipa::path(
    get,
    path = "/vendors/{vendor_id}",
    params(("vendor_id" = String, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Vendor details", body = Vendor),
        (status = 401, description = "Missing user-id header"),
        (status = 404, description = "Vendor not found")
    ),
    tag = "catalog"
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<Vendor>, AppError> {
    state
        .catalog
        .vendors()
        .iter()
        .find(|v| v.id == vendor_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))
}

#[utoipa::path(
    get,
    path = "/vendors/{vendor_id}/addresses",
    params(("vendor_id" = String, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Addresses for the vendor", body = AddressesResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn get_vendor_addresses(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Json<AddressesResponse> {
    let addresses = state
        .catalog
        .addresses()
        .iter()
        .filter(|a| a.vendor_id == vendor_id)
        .cloned()
        .collect();

    Json(AddressesResponse { addresses })
}

#[utoipa::path(
    get,
    path = "/vendors/{vendor_id}/payment-terms",
    params(("vendor_id" = String, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Payment terms for the vendor", body = PaymentTermsResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn get_vendor_payment_terms(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Json<PaymentTermsResponse> {
    let payment_terms = state.catalog.payment_terms(&vendor_id);

    Json(PaymentTermsResponse {
        vendor_id,
        payment_terms,
    })
}
