use serde::{Deserialize, Serialize};

/// Supplier scorecard entry. Keyed by `supplier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierEntry {
    pub supplier: String,
    pub order_count: u32,
    /// Total order value placed with this supplier.
    pub value: f64,
    pub on_time_percent: f64,
    pub quality_percent: f64,
}
