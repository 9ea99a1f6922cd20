//! Fixture data store: process-wide read-only sample collections.
//!
//! Every collection is built once behind a `Lazy` and never mutated.
//! The KPI summary totals are precomputed and must stay in sync with
//! the collections they summarize (covered by the tests below).

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::domain::{
    InventoryCategory, KpiSummary, MarketSegment, MonthlySales, PlanningSeason, PricingEntry,
    SupplierEntry,
};

/// Monthly sales, oldest month first.
pub static SALES_BY_MONTH: Lazy<Vec<MonthlySales>> = Lazy::new(|| {
    [
        ("Jan 2024", 1_245_000.0, 8_420, 5.2),
        ("Feb 2024", 1_318_500.0, 8_910, 5.9),
        ("Mar 2024", 1_402_300.0, 9_340, 6.4),
        ("Apr 2024", 1_365_800.0, 9_120, -2.6),
        ("May 2024", 1_489_200.0, 9_870, 9.0),
        ("Jun 2024", 1_573_600.0, 10_240, 5.7),
    ]
    .into_iter()
    .map(|(period, revenue, units, growth_percent)| MonthlySales {
        period: period.to_string(),
        revenue,
        units,
        growth_percent,
    })
    .collect()
});

/// Stock position per product category.
pub static INVENTORY_BY_CATEGORY: Lazy<Vec<InventoryCategory>> = Lazy::new(|| {
    [
        ("Electronics", 12_450, 2_845_000.0, 4.2),
        ("Clothing", 28_300, 1_356_000.0, 6.8),
        ("Home & Garden", 9_870, 945_000.0, 3.5),
        ("Sports", 7_640, 612_000.0, 5.1),
        ("Books", 15_220, 298_000.0, 2.9),
    ]
    .into_iter()
    .map(|(category, stock_count, value, turnover_ratio)| InventoryCategory {
        category: category.to_string(),
        stock_count,
        value,
        turnover_ratio,
    })
    .collect()
});

/// Market-intelligence segment snapshot.
pub static MARKET_SEGMENTS: Lazy<Vec<MarketSegment>> = Lazy::new(|| {
    [
        ("Premium", 18.5, 12.3, 4_200_000.0),
        ("Mid-Market", 42.1, 6.8, 9_550_000.0),
        ("Value", 27.9, 3.2, 6_330_000.0),
        ("Luxury", 11.5, 15.7, 2_610_000.0),
    ]
    .into_iter()
    .map(|(segment, share_percent, growth_percent, value)| MarketSegment {
        segment: segment.to_string(),
        share_percent,
        growth_percent,
        value,
    })
    .collect()
});

/// Launch-planning state per season, chronological order.
pub static PLANNING_SEASONS: Lazy<Vec<PlanningSeason>> = Lazy::new(|| {
    [
        ("Spring 2024", 145, 132, 13, 3_420_000.0),
        ("Summer 2024", 168, 154, 14, 3_980_000.0),
        ("Fall 2024", 182, 96, 86, 2_150_000.0),
        ("Holiday 2024", 210, 24, 186, 680_000.0),
    ]
    .into_iter()
    .map(
        |(season, product_count, launched_count, pending_count, revenue)| PlanningSeason {
            season: season.to_string(),
            product_count,
            launched_count,
            pending_count,
            revenue,
        },
    )
    .collect()
});

/// Pricing positions for the tracked product set.
pub static PRICING_ENTRIES: Lazy<Vec<PricingEntry>> = Lazy::new(|| {
    [
        ("Wireless Earbuds", 89.99, 94.50, 32.5, -1.2),
        ("Running Shoes", 129.00, 119.00, 41.2, -0.8),
        ("Smart Watch", 249.99, 259.99, 28.7, -1.5),
        ("Denim Jacket", 79.50, 79.50, 38.4, -0.6),
        ("Yoga Mat", 34.99, 39.99, 45.1, -0.4),
    ]
    .into_iter()
    .map(
        |(product, current_price, optimal_price, margin_percent, elasticity)| PricingEntry {
            product: product.to_string(),
            current_price,
            optimal_price,
            margin_percent,
            elasticity,
        },
    )
    .collect()
});

/// Supplier scorecard.
pub static SUPPLIERS: Lazy<Vec<SupplierEntry>> = Lazy::new(|| {
    [
        ("Nordic Textiles", 142, 1_840_000.0, 96.5, 98.2),
        ("Shenzhen Electronics Co", 238, 3_120_000.0, 91.2, 95.8),
        ("Milano Leather Works", 87, 960_000.0, 88.7, 99.1),
        ("Pacific Sportswear", 164, 1_420_000.0, 94.3, 96.7),
        ("Global Home Supply", 113, 780_000.0, 90.1, 93.4),
    ]
    .into_iter()
    .map(
        |(supplier, order_count, value, on_time_percent, quality_percent)| SupplierEntry {
            supplier: supplier.to_string(),
            order_count,
            value,
            on_time_percent,
            quality_percent,
        },
    )
    .collect()
});

/// Headline KPI summary. Totals match the collections above.
pub static KPI_SUMMARY: Lazy<KpiSummary> = Lazy::new(|| KpiSummary {
    total_revenue: 8_394_400.0,
    revenue_growth: 6.1,
    total_orders: 55_900,
    orders_growth: 4.8,
    active_products: 705,
    inventory_value: 6_056_000.0,
    avg_margin_percent: 37.2,
    as_of: NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid fixture date"),
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unique<'a, I: Iterator<Item = &'a str>>(names: I) -> bool {
        let mut seen = HashSet::new();
        names.into_iter().all(|n| seen.insert(n))
    }

    #[test]
    fn collection_lengths() {
        assert_eq!(SALES_BY_MONTH.len(), 6);
        assert_eq!(INVENTORY_BY_CATEGORY.len(), 5);
        assert_eq!(MARKET_SEGMENTS.len(), 4);
        assert_eq!(PLANNING_SEASONS.len(), 4);
        assert_eq!(PRICING_ENTRIES.len(), 5);
        assert_eq!(SUPPLIERS.len(), 5);
    }

    #[test]
    fn inventory_categories_are_the_known_set() {
        let names: Vec<&str> = INVENTORY_BY_CATEGORY
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(
            names,
            ["Electronics", "Clothing", "Home & Garden", "Sports", "Books"]
        );
    }

    #[test]
    fn keyed_collections_have_unique_keys() {
        assert!(unique(
            INVENTORY_BY_CATEGORY.iter().map(|c| c.category.as_str())
        ));
        assert!(unique(MARKET_SEGMENTS.iter().map(|s| s.segment.as_str())));
        assert!(unique(PRICING_ENTRIES.iter().map(|p| p.product.as_str())));
        assert!(unique(SUPPLIERS.iter().map(|s| s.supplier.as_str())));
    }

    #[test]
    fn season_counts_balance() {
        for season in PLANNING_SEASONS.iter() {
            assert_eq!(
                season.launched_count + season.pending_count,
                season.product_count,
                "season {} is out of balance",
                season.season
            );
        }
    }

    #[test]
    fn kpi_summary_matches_collections() {
        let revenue: f64 = SALES_BY_MONTH.iter().map(|m| m.revenue).sum();
        assert_eq!(revenue, KPI_SUMMARY.total_revenue);

        let orders: u32 = SALES_BY_MONTH.iter().map(|m| m.units).sum();
        assert_eq!(orders, KPI_SUMMARY.total_orders);

        let products: u32 = PLANNING_SEASONS.iter().map(|s| s.product_count).sum();
        assert_eq!(products, KPI_SUMMARY.active_products);

        let stock_value: f64 = INVENTORY_BY_CATEGORY.iter().map(|c| c.value).sum();
        assert_eq!(stock_value, KPI_SUMMARY.inventory_value);
    }

    #[test]
    fn percent_fields_are_sane() {
        for segment in MARKET_SEGMENTS.iter() {
            assert!(segment.share_percent > 0.0 && segment.share_percent <= 100.0);
        }
        for supplier in SUPPLIERS.iter() {
            assert!(supplier.on_time_percent > 0.0 && supplier.on_time_percent <= 100.0);
            assert!(supplier.quality_percent > 0.0 && supplier.quality_percent <= 100.0);
        }
        for entry in PRICING_ENTRIES.iter() {
            assert!(entry.elasticity < 0.0, "demand curves slope down");
        }
    }

    #[test]
    fn market_shares_sum_to_whole() {
        let total: f64 = MARKET_SEGMENTS.iter().map(|s| s.share_percent).sum();
        assert!((total - 100.0).abs() < 0.01);
    }
}
