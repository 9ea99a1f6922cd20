use contracts::domain::MarketSegment;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::{format_money, format_percent, format_signed_percent};

/// Display row for the market segment table.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRow {
    pub segment: String,
    pub share: String,
    pub growth: String,
    pub growth_up: bool,
    pub value: String,
}

impl SegmentRow {
    fn from_segment(segment: &MarketSegment) -> Self {
        Self {
            segment: segment.segment.clone(),
            share: format_percent(segment.share_percent),
            growth: format_signed_percent(segment.growth_percent),
            growth_up: segment.growth_percent >= 0.0,
            value: format_money(segment.value),
        }
    }
}

pub fn build_rows(segments: &[MarketSegment]) -> Vec<SegmentRow> {
    segments.iter().map(SegmentRow::from_segment).collect()
}

/// Segment holding the largest market share.
pub fn leading_segment(segments: &[MarketSegment]) -> Option<&MarketSegment> {
    segments
        .iter()
        .max_by(|a, b| a.share_percent.total_cmp(&b.share_percent))
}

/// Segment with the highest growth rate.
pub fn fastest_growing(segments: &[MarketSegment]) -> Option<&MarketSegment> {
    segments
        .iter()
        .max_by(|a, b| a.growth_percent.total_cmp(&b.growth_percent))
}

impl CsvExportable for SegmentRow {
    fn headers() -> Vec<&'static str> {
        vec!["Segment", "Share %", "Growth %", "Value"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.segment.clone(),
            self.share.clone(),
            self.growth.clone(),
            self.value.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::MARKET_SEGMENTS;

    #[test]
    fn one_row_per_segment() {
        let rows = build_rows(&MARKET_SEGMENTS);
        assert_eq!(rows.len(), MARKET_SEGMENTS.len());
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn rows_format_fixture_values() {
        let rows = build_rows(&MARKET_SEGMENTS);
        assert_eq!(rows[0].segment, "Premium");
        assert_eq!(rows[0].share, "18.5%");
        assert_eq!(rows[0].growth, "+12.3%");
        assert_eq!(rows[0].value, "4 200 000.00");
    }

    #[test]
    fn leading_segment_has_largest_share() {
        let leader = leading_segment(&MARKET_SEGMENTS).unwrap();
        assert_eq!(leader.segment, "Mid-Market");
    }

    #[test]
    fn fastest_growing_segment() {
        let fastest = fastest_growing(&MARKET_SEGMENTS).unwrap();
        assert_eq!(fastest.segment, "Luxury");
    }

    #[test]
    fn empty_input_yields_no_aggregates() {
        assert!(leading_segment(&[]).is_none());
        assert!(fastest_growing(&[]).is_none());
    }
}
