use contracts::domain::PlanningSeason;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::{format_int, format_money, format_percent};

/// Display row for the season planning table.
#[derive(Clone, Debug, PartialEq)]
pub struct SeasonRow {
    pub season: String,
    pub products: String,
    pub launched: String,
    pub pending: String,
    pub completion: String,
    pub revenue: String,
}

/// Share of a season's products already launched, in percent.
pub fn completion_percent(season: &PlanningSeason) -> f64 {
    if season.product_count == 0 {
        return 0.0;
    }
    season.launched_count as f64 * 100.0 / season.product_count as f64
}

impl SeasonRow {
    fn from_season(season: &PlanningSeason) -> Self {
        Self {
            season: season.season.clone(),
            products: format_int(season.product_count as f64),
            launched: format_int(season.launched_count as f64),
            pending: format_int(season.pending_count as f64),
            completion: format_percent(completion_percent(season)),
            revenue: format_money(season.revenue),
        }
    }
}

pub fn build_rows(seasons: &[PlanningSeason]) -> Vec<SeasonRow> {
    seasons.iter().map(SeasonRow::from_season).collect()
}

/// Launched share across all seasons, in percent.
pub fn overall_completion(seasons: &[PlanningSeason]) -> f64 {
    let products: u32 = seasons.iter().map(|s| s.product_count).sum();
    if products == 0 {
        return 0.0;
    }
    let launched: u32 = seasons.iter().map(|s| s.launched_count).sum();
    launched as f64 * 100.0 / products as f64
}

impl CsvExportable for SeasonRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Season",
            "Products",
            "Launched",
            "Pending",
            "Completion %",
            "Revenue",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.season.clone(),
            self.products.clone(),
            self.launched.clone(),
            self.pending.clone(),
            self.completion.clone(),
            self.revenue.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::PLANNING_SEASONS;

    #[test]
    fn one_row_per_season() {
        let rows = build_rows(&PLANNING_SEASONS);
        assert_eq!(rows.len(), PLANNING_SEASONS.len());
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn completion_reflects_launched_share() {
        let rows = build_rows(&PLANNING_SEASONS);
        let spring = rows.iter().find(|r| r.season == "Spring 2024").unwrap();
        // 132 of 145 launched
        assert_eq!(spring.completion, "91.0%");

        let holiday = rows.iter().find(|r| r.season == "Holiday 2024").unwrap();
        // 24 of 210 launched
        assert_eq!(holiday.completion, "11.4%");
    }

    #[test]
    fn overall_completion_spans_all_seasons() {
        // 406 of 705 products launched
        let overall = overall_completion(&PLANNING_SEASONS);
        assert!((overall - 57.6).abs() < 0.05);
        assert_eq!(overall_completion(&[]), 0.0);
    }

    #[test]
    fn completion_handles_empty_season() {
        let season = PlanningSeason {
            season: "Preview 2025".to_string(),
            product_count: 0,
            launched_count: 0,
            pending_count: 0,
            revenue: 0.0,
        };
        assert_eq!(completion_percent(&season), 0.0);
    }
}
