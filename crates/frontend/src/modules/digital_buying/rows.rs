use contracts::domain::SupplierEntry;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::{format_int, format_money, format_percent};

/// Supplier performance rating, derived from delivery and quality
/// scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplierRating {
    Excellent,
    Good,
    NeedsReview,
}

impl SupplierRating {
    pub fn label(&self) -> &'static str {
        match self {
            SupplierRating::Excellent => "Excellent",
            SupplierRating::Good => "Good",
            SupplierRating::NeedsReview => "Needs review",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            SupplierRating::Excellent => "success",
            SupplierRating::Good => "primary",
            SupplierRating::NeedsReview => "warning",
        }
    }
}

/// Rates a supplier on the mean of on-time and quality percentages.
pub fn supplier_rating(entry: &SupplierEntry) -> SupplierRating {
    let score = (entry.on_time_percent + entry.quality_percent) / 2.0;
    if score >= 96.0 {
        SupplierRating::Excellent
    } else if score >= 92.0 {
        SupplierRating::Good
    } else {
        SupplierRating::NeedsReview
    }
}

/// Display row for the supplier scorecard table.
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierRow {
    pub supplier: String,
    pub orders: String,
    pub value: String,
    pub on_time: String,
    pub quality: String,
    pub rating: SupplierRating,
}

impl SupplierRow {
    fn from_entry(entry: &SupplierEntry) -> Self {
        Self {
            supplier: entry.supplier.clone(),
            orders: format_int(entry.order_count as f64),
            value: format_money(entry.value),
            on_time: format_percent(entry.on_time_percent),
            quality: format_percent(entry.quality_percent),
            rating: supplier_rating(entry),
        }
    }
}

pub fn build_rows(entries: &[SupplierEntry]) -> Vec<SupplierRow> {
    entries.iter().map(SupplierRow::from_entry).collect()
}

/// Orders placed across all suppliers.
pub fn total_orders(entries: &[SupplierEntry]) -> u32 {
    entries.iter().map(|e| e.order_count).sum()
}

/// Order value across all suppliers.
pub fn total_value(entries: &[SupplierEntry]) -> f64 {
    entries.iter().map(|e| e.value).sum()
}

impl CsvExportable for SupplierRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Supplier",
            "Orders",
            "Value",
            "On-Time %",
            "Quality %",
            "Rating",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.supplier.clone(),
            self.orders.clone(),
            self.value.clone(),
            self.on_time.clone(),
            self.quality.clone(),
            self.rating.label().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::SUPPLIERS;

    #[test]
    fn one_row_per_supplier() {
        let rows = build_rows(&SUPPLIERS);
        assert_eq!(rows.len(), SUPPLIERS.len());
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn rows_carry_the_supplier_names() {
        let rows = build_rows(&SUPPLIERS);
        let names: Vec<&str> = rows.iter().map(|r| r.supplier.as_str()).collect();
        assert_eq!(
            names,
            [
                "Nordic Textiles",
                "Shenzhen Electronics Co",
                "Milano Leather Works",
                "Pacific Sportswear",
                "Global Home Supply"
            ]
        );
    }

    #[test]
    fn ratings_follow_combined_score() {
        let rows = build_rows(&SUPPLIERS);
        let by_name = |name: &str| rows.iter().find(|r| r.supplier == name).unwrap();

        // (96.5 + 98.2) / 2 = 97.35
        assert_eq!(by_name("Nordic Textiles").rating, SupplierRating::Excellent);
        // (91.2 + 95.8) / 2 = 93.5
        assert_eq!(
            by_name("Shenzhen Electronics Co").rating,
            SupplierRating::Good
        );
        // (90.1 + 93.4) / 2 = 91.75
        assert_eq!(
            by_name("Global Home Supply").rating,
            SupplierRating::NeedsReview
        );
    }

    #[test]
    fn totals_span_all_suppliers() {
        assert_eq!(total_orders(&SUPPLIERS), 744);
        assert_eq!(total_value(&SUPPLIERS), 8_120_000.0);
    }
}
