pub mod sample;

pub use sample::SampleCatalog;

use crate::models::{
    CategorySpend, Invoice, LineItem, LowStockMaterial, Material, MonthlySpend, PaymentTerms,
    PricePoint, Project, Vendor, VendorAddress, VendorSpend,
};

/// Read-only source for the procurement catalog. The handlers only ever
/// filter what this trait hands out, so a real data source can replace the
/// seeded one without touching them.
pub trait CatalogRepository: Send + Sync {
    fn vendors(&self) -> &[Vendor];
    fn addresses(&self) -> &[VendorAddress];
    fn materials(&self) -> &[Material];
    fn invoices(&self) -> &[Invoice];
    fn line_items(&self) -> &[LineItem];
    fn projects(&self) -> &[Project];

    fn payment_terms(&self, vendor_id: &str) -> PaymentTerms;
    fn price_history(&self, material_id: &str) -> Vec<PricePoint>;
    fn low_stock(&self) -> Vec<LowStockMaterial>;

    fn spend_by_vendor(&self) -> Vec<VendorSpend>;
    fn spend_by_category(&self) -> Vec<CategorySpend>;
    fn monthly_spend(&self) -> Vec<MonthlySpend>;
}
