use contracts::domain::PricingEntry;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::{format_money, format_percent};

/// Recommended price move, derived from current vs optimal price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceAction {
    Raise,
    Lower,
    Hold,
}

impl PriceAction {
    pub fn label(&self) -> &'static str {
        match self {
            PriceAction::Raise => "Raise",
            PriceAction::Lower => "Lower",
            PriceAction::Hold => "Hold",
        }
    }

    /// Badge variant used when rendering the action.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            PriceAction::Raise => "success",
            PriceAction::Lower => "warning",
            PriceAction::Hold => "neutral",
        }
    }
}

/// Derives the price action. Differences under one cent count as Hold.
pub fn price_action(entry: &PricingEntry) -> PriceAction {
    let delta = entry.optimal_price - entry.current_price;
    if delta > 0.01 {
        PriceAction::Raise
    } else if delta < -0.01 {
        PriceAction::Lower
    } else {
        PriceAction::Hold
    }
}

/// Display row for the pricing table.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingRow {
    pub product: String,
    pub current_price: String,
    pub optimal_price: String,
    pub margin: String,
    pub elasticity: String,
    pub action: PriceAction,
}

impl PricingRow {
    fn from_entry(entry: &PricingEntry) -> Self {
        Self {
            product: entry.product.clone(),
            current_price: format_money(entry.current_price),
            optimal_price: format_money(entry.optimal_price),
            margin: format_percent(entry.margin_percent),
            elasticity: format!("{:.1}", entry.elasticity),
            action: price_action(entry),
        }
    }
}

pub fn build_rows(entries: &[PricingEntry]) -> Vec<PricingRow> {
    entries.iter().map(PricingRow::from_entry).collect()
}

impl CsvExportable for PricingRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Product",
            "Current Price",
            "Optimal Price",
            "Margin %",
            "Elasticity",
            "Action",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.product.clone(),
            self.current_price.clone(),
            self.optimal_price.clone(),
            self.margin.clone(),
            self.elasticity.clone(),
            self.action.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::PRICING_ENTRIES;

    #[test]
    fn one_row_per_entry() {
        let rows = build_rows(&PRICING_ENTRIES);
        assert_eq!(rows.len(), PRICING_ENTRIES.len());
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn actions_follow_price_gap() {
        let rows = build_rows(&PRICING_ENTRIES);
        let by_name = |name: &str| rows.iter().find(|r| r.product == name).unwrap();

        // optimal above current
        assert_eq!(by_name("Wireless Earbuds").action, PriceAction::Raise);
        // optimal below current
        assert_eq!(by_name("Running Shoes").action, PriceAction::Lower);
        // already at optimum
        assert_eq!(by_name("Denim Jacket").action, PriceAction::Hold);
    }

    #[test]
    fn rows_format_fixture_values() {
        let rows = build_rows(&PRICING_ENTRIES);
        assert_eq!(rows[0].product, "Wireless Earbuds");
        assert_eq!(rows[0].current_price, "89.99");
        assert_eq!(rows[0].optimal_price, "94.50");
        assert_eq!(rows[0].margin, "32.5%");
        assert_eq!(rows[0].elasticity, "-1.2");
    }
}
