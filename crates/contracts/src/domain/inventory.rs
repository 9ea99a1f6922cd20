use serde::{Deserialize, Serialize};

/// Stock position of one product category. Keyed by `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCategory {
    pub category: String,
    pub stock_count: u32,
    /// Total value of stock on hand.
    pub value: f64,
    /// Annualized inventory turnover ratio.
    pub turnover_ratio: f64,
}
