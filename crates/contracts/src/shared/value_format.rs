use serde::{Deserialize, Serialize};

/// How to format a numeric KPI value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    /// Money format with the dashboard's reporting currency.
    pub fn usd() -> Self {
        ValueFormat::Money {
            currency: "USD".to_string(),
        }
    }
}
