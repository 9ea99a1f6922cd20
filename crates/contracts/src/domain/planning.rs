use serde::{Deserialize, Serialize};

/// Product-launch planning state for one season.
///
/// Invariant: `launched_count + pending_count == product_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSeason {
    pub season: String,
    pub product_count: u32,
    pub launched_count: u32,
    pub pending_count: u32,
    pub revenue: f64,
}
