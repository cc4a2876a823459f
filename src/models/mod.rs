use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StoredFileInfo {
    pub path: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Completed,
    Failed,
}

/// Outcome of one file within an upload batch, accumulated over the
/// lifetime of the batch and echoed in every progress event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessedFile {
    pub filename: String,
    pub status: FileStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Success,
}

/// One line of the streamed upload response. `Progress` is emitted once per
/// file after its outcome is known; `Complete` terminates the stream.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProgressEvent {
    Progress {
        current_file: String,
        total_files: usize,
        processed_files: Vec<ProcessedFile>,
    },
    Complete {
        status: BatchStatus,
        files: Vec<ProcessedFile>,
    },
}

/// A page of a caller's stored files. `total` counts the full set before
/// slicing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileListing {
    pub files: Vec<StoredFileInfo>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorAddress {
    pub id: String,
    pub vendor_id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Invoice {
    pub id: String,
    pub vendor_id: String,
    pub number: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LineItem {
    pub id: String,
    pub invoice_id: String,
    pub material_id: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentTerms {
    pub net_days: u32,
    pub discount_percent: f64,
    pub discount_days: u32,
    pub credit_limit: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LowStockMaterial {
    pub material_id: String,
    pub name: String,
    pub current_stock: u32,
    pub reorder_point: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VendorSpend {
    pub vendor_id: String,
    pub vendor_name: String,
    pub total_spend: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategorySpend {
    pub category: String,
    pub total_spend: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlySpend {
    pub month: String,
    pub total_spend: f64,
}
