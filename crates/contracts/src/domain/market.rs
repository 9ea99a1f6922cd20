use serde::{Deserialize, Serialize};

/// Market-intelligence snapshot for one segment. Keyed by `segment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSegment {
    pub segment: String,
    pub share_percent: f64,
    pub growth_percent: f64,
    /// Segment market value.
    pub value: f64,
}
