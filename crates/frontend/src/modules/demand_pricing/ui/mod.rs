use contracts::fixtures::{KPI_SUMMARY, PRICING_ENTRIES};
use contracts::shared::ValueFormat;
use leptos::prelude::*;

use super::rows;
use crate::shared::components::{
    Badge, Card, CardContent, CardHeader, CardTitle, ExportActions, PageHeader, StatCard,
};
use crate::shared::export::{export_csv, to_json_pretty};
use crate::shared::page_frame::PageFrame;

#[component]
pub fn DemandPricingPage() -> impl IntoView {
    let pricing_rows = rows::build_rows(&PRICING_ENTRIES);

    let on_csv = Callback::new(|_: ()| {
        let rows = rows::build_rows(&PRICING_ENTRIES);
        if let Err(err) = export_csv(&rows, "pricing_entries.csv") {
            log::error!("CSV export failed: {err}");
        }
    });

    let json = to_json_pretty(&*PRICING_ENTRIES).unwrap_or_else(|err| {
        log::error!("JSON build failed: {err}");
        String::new()
    });

    view! {
        <PageFrame module_key="demand-pricing">
            <PageHeader title="Demand & Pricing" subtitle="Price positions and elasticity">
                <ExportActions on_csv=on_csv json=json />
            </PageHeader>

            <div class="stat-grid stat-grid--cols-2">
                <StatCard
                    label="Avg Margin"
                    icon_name="percent"
                    value=KPI_SUMMARY.avg_margin_percent
                    format={ValueFormat::Percent { decimals: 1 }}
                />
                <StatCard
                    label="Tracked Products"
                    icon_name="tag"
                    value={PRICING_ENTRIES.len() as f64}
                    format=ValueFormat::Integer
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Price Optimization"</CardTitle>
                </CardHeader>
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th class="data-table__num">"Current"</th>
                                <th class="data-table__num">"Optimal"</th>
                                <th class="data-table__num">"Margin"</th>
                                <th class="data-table__num">"Elasticity"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {pricing_rows.into_iter().map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.product}</td>
                                        <td class="data-table__num">{row.current_price}</td>
                                        <td class="data-table__num">{row.optimal_price}</td>
                                        <td class="data-table__num">{row.margin}</td>
                                        <td class="data-table__num">{row.elasticity}</td>
                                        <td>
                                            <Badge variant=row.action.badge_variant()>
                                                {row.action.label()}
                                            </Badge>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </CardContent>
            </Card>
        </PageFrame>
    }
}
