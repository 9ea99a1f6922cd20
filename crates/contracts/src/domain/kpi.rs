use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline KPI summary rendered on the Dashboard module.
///
/// Totals are precomputed and must stay consistent with the
/// per-collection fixtures they summarize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total_revenue: f64,
    /// Year-over-year revenue growth, percent.
    pub revenue_growth: f64,
    pub total_orders: u32,
    pub orders_growth: f64,
    pub active_products: u32,
    pub inventory_value: f64,
    pub avg_margin_percent: f64,
    /// Date the fixture snapshot represents.
    pub as_of: NaiveDate,
}
