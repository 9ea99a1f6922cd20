pub mod buying;
pub mod inventory;
pub mod kpi;
pub mod market;
pub mod planning;
pub mod pricing;
pub mod sales;

pub use buying::SupplierEntry;
pub use inventory::InventoryCategory;
pub use kpi::KpiSummary;
pub use market::MarketSegment;
pub use planning::PlanningSeason;
pub use pricing::PricingEntry;
pub use sales::MonthlySales;
