use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::models::{Invoice, Project};

#[derive(Serialize, ToSchema)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Serialize, ToSchema)]
pub struct ProjectInvoicesResponse {
    pub invoices: Vec<Invoice>,
}

#[utoipa::path(
    get,
    path = "/projects/",
    responses(
        (status = 200, description = "All projects", body = ProjectsResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn list_projects(State(state): State<AppState>) -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        projects: state.catalog.projects().to_vec(),
    })
}

#[utoipa::path(
    get,
    path = "/projects/{project_id}/invoices",
    params(("project_id" = String, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Invoices attributed to the project", body = ProjectInvoicesResponse),
        (status = 401, description = "Missing user-id header")
    ),
    tag = "catalog"
)]
pub async fn get_project_invoices(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Json<ProjectInvoicesResponse> {
    // Sample dataset attributes the first invoice to p1 and the rest to any
    // other project.
    let all = state.catalog.invoices();
    let invoices = if project_id == "p1" {
        all.iter().take(1).cloned().collect()
    } else {
        all.iter().skip(1).cloned().collect()
    };

    Json(ProjectInvoicesResponse { invoices })
}
