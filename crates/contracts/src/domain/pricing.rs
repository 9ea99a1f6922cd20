use serde::{Deserialize, Serialize};

/// Pricing position of one product. Keyed by `product`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    pub product: String,
    pub current_price: f64,
    /// Model-recommended price point.
    pub optimal_price: f64,
    pub margin_percent: f64,
    /// Price elasticity of demand (negative: demand falls as price rises).
    pub elasticity: f64,
}
