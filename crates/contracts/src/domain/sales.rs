use serde::{Deserialize, Serialize};

/// One month of aggregated sales. Part of an ordered sequence,
/// oldest month first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Display label of the month, e.g. "Jan 2024".
    pub period: String,
    pub revenue: f64,
    pub units: u32,
    /// Month-over-month revenue growth, percent.
    pub growth_percent: f64,
}
