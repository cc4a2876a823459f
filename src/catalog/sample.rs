use chrono::NaiveDate;

use super::CatalogRepository;
use crate::models::{
    CategorySpend, Invoice, LineItem, LowStockMaterial, Material, MonthlySpend, PaymentTerms,
    PricePoint, Project, Vendor, VendorAddress, VendorSpend,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn s(v: &str) -> String {
    v.to_string()
}

/// Fixed sample dataset standing in for a real procurement database.
pub struct SampleCatalog {
    vendors: Vec<Vendor>,
    addresses: Vec<VendorAddress>,
    materials: Vec<Material>,
    invoices: Vec<Invoice>,
    line_items: Vec<LineItem>,
    projects: Vec<Project>,
}

impl SampleCatalog {
    pub fn seed() -> Self {
        Self {
            vendors: vec![
                Vendor {
                    id: s("v1"),
                    name: s("Home Depot"),
                    email: s("orders@homedepot.com"),
                    phone: s("1-800-466-3337"),
                },
                Vendor {
                    id: s("v2"),
                    name: s("Lowes"),
                    email: s("orders@lowes.com"),
                    phone: s("1-800-445-6937"),
                },
                Vendor {
                    id: s("v3"),
                    name: s("Ferguson"),
                    email: s("orders@ferguson.com"),
                    phone: s("1-800-634-0348"),
                },
            ],
            addresses: vec![
                VendorAddress {
                    id: s("a1"),
                    vendor_id: s("v1"),
                    street: s("123 Main St"),
                    city: s("Atlanta"),
                    state: s("GA"),
                    zip: s("30301"),
                },
                VendorAddress {
                    id: s("a2"),
                    vendor_id: s("v1"),
                    street: s("456 Oak Ave"),
                    city: s("Miami"),
                    state: s("FL"),
                    zip: s("33101"),
                },
                VendorAddress {
                    id: s("a3"),
                    vendor_id: s("v2"),
                    street: s("789 Pine Rd"),
                    city: s("Dallas"),
                    state: s("TX"),
                    zip: s("75201"),
                },
            ],
            materials: vec![
                Material {
                    id: s("m1"),
                    name: s("2x4 Lumber"),
                    category: s("Wood"),
                    unit: s("piece"),
                },
                Material {
                    id: s("m2"),
                    name: s("Concrete Mix"),
                    category: s("Concrete"),
                    unit: s("bag"),
                },
                Material {
                    id: s("m3"),
                    name: s("PVC Pipe 2\""),
                    category: s("Plumbing"),
                    unit: s("foot"),
                },
            ],
            invoices: vec![
                Invoice {
                    id: s("i1"),
                    vendor_id: s("v1"),
                    number: s("INV-001"),
                    date: date(2024, 1, 15),
                    total: 1234.56,
                    status: s("processed"),
                },
                Invoice {
                    id: s("i2"),
                    vendor_id: s("v2"),
                    number: s("INV-002"),
                    date: date(2024, 1, 16),
                    total: 2345.67,
                    status: s("processing"),
                },
            ],
            line_items: vec![
                LineItem {
                    id: s("l1"),
                    invoice_id: s("i1"),
                    material_id: s("m1"),
                    quantity: 100,
                    unit_price: 5.99,
                },
                LineItem {
                    id: s("l2"),
                    invoice_id: s("i1"),
                    material_id: s("m2"),
                    quantity: 50,
                    unit_price: 12.99,
                },
                LineItem {
                    id: s("l3"),
                    invoice_id: s("i2"),
                    material_id: s("m3"),
                    quantity: 200,
                    unit_price: 3.99,
                },
            ],
            projects: vec![
                Project {
                    id: s("p1"),
                    name: s("Downtown High-rise"),
                    address: s("100 Peachtree St, Atlanta, GA"),
                },
                Project {
                    id: s("p2"),
                    name: s("Suburban Mall"),
                    address: s("200 Mall Road, Miami, FL"),
                },
            ],
        }
    }
}

impl CatalogRepository for SampleCatalog {
    fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    fn addresses(&self) -> &[VendorAddress] {
        &self.addresses
    }

    fn materials(&self) -> &[Material] {
        &self.materials
    }

    fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn payment_terms(&self, _vendor_id: &str) -> PaymentTerms {
        PaymentTerms {
            net_days: 30,
            discount_percent: 2.0,
            discount_days: 10,
            credit_limit: 50000.00,
        }
    }

    fn price_history(&self, _material_id: &str) -> Vec<PricePoint> {
        vec![
            PricePoint {
                date: date(2024, 1, 15),
                price: 5.99,
            },
            PricePoint {
                date: date(2024, 2, 15),
                price: 6.49,
            },
            PricePoint {
                date: date(2024, 3, 15),
                price: 6.29,
            },
        ]
    }

    fn low_stock(&self) -> Vec<LowStockMaterial> {
        vec![
            LowStockMaterial {
                material_id: s("m1"),
                name: s("2x4 Lumber"),
                current_stock: 50,
                reorder_point: 100,
            },
            LowStockMaterial {
                material_id: s("m2"),
                name: s("Concrete Mix"),
                current_stock: 25,
                reorder_point: 40,
            },
        ]
    }

    fn spend_by_vendor(&self) -> Vec<VendorSpend> {
        vec![
            VendorSpend {
                vendor_id: s("v1"),
                vendor_name: s("Home Depot"),
                total_spend: 50000.00,
            },
            VendorSpend {
                vendor_id: s("v2"),
                vendor_name: s("Lowes"),
                total_spend: 35000.00,
            },
        ]
    }

    fn spend_by_category(&self) -> Vec<CategorySpend> {
        vec![
            CategorySpend {
                category: s("Wood"),
                total_spend: 25000.00,
            },
            CategorySpend {
                category: s("Concrete"),
                total_spend: 30000.00,
            },
            CategorySpend {
                category: s("Plumbing"),
                total_spend: 15000.00,
            },
        ]
    }

    fn monthly_spend(&self) -> Vec<MonthlySpend> {
        vec![
            MonthlySpend {
                month: s("2024-01"),
                total_spend: 45000.00,
            },
            MonthlySpend {
                month: s("2024-02"),
                total_spend: 52000.00,
            },
            MonthlySpend {
                month: s("2024-03"),
                total_spend: 38000.00,
            },
        ]
    }
}
