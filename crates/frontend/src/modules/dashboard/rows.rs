use contracts::domain::MonthlySales;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::{format_int, format_money, format_signed_percent};

/// Display row for the monthly sales table.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlySalesRow {
    pub period: String,
    pub revenue: String,
    pub units: String,
    pub growth: String,
    pub growth_up: bool,
}

impl MonthlySalesRow {
    fn from_month(month: &MonthlySales) -> Self {
        Self {
            period: month.period.clone(),
            revenue: format_money(month.revenue),
            units: format_int(month.units as f64),
            growth: format_signed_percent(month.growth_percent),
            growth_up: month.growth_percent >= 0.0,
        }
    }
}

pub fn build_rows(months: &[MonthlySales]) -> Vec<MonthlySalesRow> {
    months.iter().map(MonthlySalesRow::from_month).collect()
}

impl CsvExportable for MonthlySalesRow {
    fn headers() -> Vec<&'static str> {
        vec!["Period", "Revenue", "Units", "Growth %"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.period.clone(),
            self.revenue.clone(),
            self.units.clone(),
            self.growth.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::SALES_BY_MONTH;

    #[test]
    fn one_row_per_month() {
        let rows = build_rows(&SALES_BY_MONTH);
        assert_eq!(rows.len(), SALES_BY_MONTH.len());
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn rows_format_fixture_values() {
        let rows = build_rows(&SALES_BY_MONTH);
        assert_eq!(rows[0].period, "Jan 2024");
        assert_eq!(rows[0].revenue, "1 245 000.00");
        assert_eq!(rows[0].units, "8 420");
        assert_eq!(rows[0].growth, "+5.2%");
        assert!(rows[0].growth_up);
    }

    #[test]
    fn negative_growth_is_marked_down() {
        let rows = build_rows(&SALES_BY_MONTH);
        let april = rows.iter().find(|r| r.period == "Apr 2024").unwrap();
        assert_eq!(april.growth, "-2.6%");
        assert!(!april.growth_up);
    }
}
