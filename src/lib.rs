pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::CatalogRepository;
use crate::config::UploadConfig;
use crate::services::file_service::FileService;
use crate::services::identity::IdentityProvider;
use crate::services::ingest::IngestService;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::uploads::upload_files,
        api::handlers::files::list_files,
        api::handlers::vendors::list_vendors,
        api::handlers::vendors::get_vendor,
        api::handlers::vendors::get_vendor_addresses,
        api::handlers::vendors::get_vendor_payment_terms,
        api::handlers::materials::list_materials,
        api::handlers::materials::get_material_price_history,
        api::handlers::materials::get_low_stock_materials,
        api::handlers::invoices::list_invoices,
        api::handlers::invoices::get_invoice,
        api::handlers::invoices::get_invoice_line_items,
        api::handlers::projects::list_projects,
        api::handlers::projects::get_project_invoices,
        api::handlers::analytics::get_spend_by_vendor,
        api::handlers::analytics::get_spend_by_category,
        api::handlers::analytics::get_monthly_spend,
        api::handlers::health::health_check,
    ),
    components(
        schemas(
            models::StoredFileInfo,
            models::FileStatus,
            models::ProcessedFile,
            models::BatchStatus,
            models::ProgressEvent,
            models::FileListing,
            models::Vendor,
            models::VendorAddress,
            models::Material,
            models::Invoice,
            models::LineItem,
            models::Project,
            models::PaymentTerms,
            models::PricePoint,
            models::LowStockMaterial,
            models::VendorSpend,
            models::CategorySpend,
            models::MonthlySpend,
            api::handlers::vendors::VendorsResponse,
            api::handlers::vendors::AddressesResponse,
            api::handlers::vendors::PaymentTermsResponse,
            api::handlers::materials::MaterialsResponse,
            api::handlers::materials::PriceHistoryResponse,
            api::handlers::materials::LowStockResponse,
            api::handlers::invoices::InvoicesResponse,
            api::handlers::invoices::LineItemsResponse,
            api::handlers::projects::ProjectsResponse,
            api::handlers::projects::ProjectInvoicesResponse,
            api::handlers::analytics::SpendByVendorResponse,
            api::handlers::analytics::SpendByCategoryResponse,
            api::handlers::analytics::MonthlySpendResponse,
            api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "files", description = "File ingestion endpoints"),
        (name = "catalog", description = "Vendor, material, invoice and project lookups"),
        (name = "analytics", description = "Spend analytics"),
        (name = "system", description = "Operational endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub ingest: Arc<IngestService>,
    pub files: Arc<FileService>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub config: UploadConfig,
}

pub fn create_app(state: AppState) -> Router {
    // Everything except health and docs requires the caller identity.
    let protected = Router::new()
        .route(
            "/upload/",
            post(api::handlers::uploads::upload_files)
                .layer(DefaultBodyLimit::max(state.config.max_request_size)),
        )
        .route("/files/", get(api::handlers::files::list_files))
        .route("/vendors/", get(api::handlers::vendors::list_vendors))
        .route("/vendors/:vendor_id", get(api::handlers::vendors::get_vendor))
        .route(
            "/vendors/:vendor_id/addresses",
            get(api::handlers::vendors::get_vendor_addresses),
        )
        .route(
            "/vendors/:vendor_id/payment-terms",
            get(api::handlers::vendors::get_vendor_payment_terms),
        )
        .route("/materials/", get(api::handlers::materials::list_materials))
        .route(
            "/materials/price-history/:material_id",
            get(api::handlers::materials::get_material_price_history),
        )
        .route(
            "/materials/low-stock",
            get(api::handlers::materials::get_low_stock_materials),
        )
        .route("/invoices/", get(api::handlers::invoices::list_invoices))
        .route("/invoices/:invoice_id", get(api::handlers::invoices::get_invoice))
        .route(
            "/invoices/:invoice_id/line-items",
            get(api::handlers::invoices::get_invoice_line_items),
        )
        .route("/projects/", get(api::handlers::projects::list_projects))
        .route(
            "/projects/:project_id/invoices",
            get(api::handlers::projects::get_project_invoices),
        )
        .route(
            "/analytics/spend-by-vendor",
            get(api::handlers::analytics::get_spend_by_vendor),
        )
        .route(
            "/analytics/spend-by-category",
            get(api::handlers::analytics::get_spend_by_category),
        )
        .route(
            "/analytics/monthly-spend",
            get(api::handlers::analytics::get_monthly_spend),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            api::middleware::auth::auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::handlers::health::health_check))
        .merge(protected)
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
