use contracts::domain::InventoryCategory;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::{format_int, format_money};

/// Display row for the inventory category table.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub category: String,
    pub stock: String,
    pub value: String,
    pub turnover: String,
}

impl CategoryRow {
    fn from_category(category: &InventoryCategory) -> Self {
        Self {
            category: category.category.clone(),
            stock: format_int(category.stock_count as f64),
            value: format_money(category.value),
            turnover: format!("{:.1}x", category.turnover_ratio),
        }
    }
}

pub fn build_rows(categories: &[InventoryCategory]) -> Vec<CategoryRow> {
    categories.iter().map(CategoryRow::from_category).collect()
}

/// Units on hand across all categories.
pub fn total_stock(categories: &[InventoryCategory]) -> u32 {
    categories.iter().map(|c| c.stock_count).sum()
}

/// Stock value across all categories.
pub fn total_value(categories: &[InventoryCategory]) -> f64 {
    categories.iter().map(|c| c.value).sum()
}

impl CsvExportable for CategoryRow {
    fn headers() -> Vec<&'static str> {
        vec!["Category", "Stock", "Value", "Turnover"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.category.clone(),
            self.stock.clone(),
            self.value.clone(),
            self.turnover.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::INVENTORY_BY_CATEGORY;

    #[test]
    fn one_row_per_category() {
        let rows = build_rows(&INVENTORY_BY_CATEGORY);
        assert_eq!(rows.len(), INVENTORY_BY_CATEGORY.len());
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn rows_carry_the_category_names() {
        let rows = build_rows(&INVENTORY_BY_CATEGORY);
        let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            names,
            ["Electronics", "Clothing", "Home & Garden", "Sports", "Books"]
        );
    }

    #[test]
    fn rows_format_fixture_values() {
        let rows = build_rows(&INVENTORY_BY_CATEGORY);
        assert_eq!(rows[0].stock, "12 450");
        assert_eq!(rows[0].value, "2 845 000.00");
        assert_eq!(rows[0].turnover, "4.2x");
    }

    #[test]
    fn totals_span_all_categories() {
        assert_eq!(total_stock(&INVENTORY_BY_CATEGORY), 73_480);
        assert_eq!(total_value(&INVENTORY_BY_CATEGORY), 6_056_000.0);
        assert_eq!(total_stock(&[]), 0);
    }
}
