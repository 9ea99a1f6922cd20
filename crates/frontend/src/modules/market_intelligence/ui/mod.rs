use contracts::fixtures::MARKET_SEGMENTS;
use contracts::shared::ValueFormat;
use leptos::prelude::*;

use super::rows;
use crate::shared::components::{
    Badge, Card, CardContent, CardHeader, CardTitle, ExportActions, PageHeader, StatCard,
};
use crate::shared::export::{export_csv, to_json_pretty};
use crate::shared::page_frame::PageFrame;

#[component]
pub fn MarketIntelligencePage() -> impl IntoView {
    let segment_rows = rows::build_rows(&MARKET_SEGMENTS);
    let leader = rows::leading_segment(&MARKET_SEGMENTS).cloned();
    let fastest = rows::fastest_growing(&MARKET_SEGMENTS).cloned();

    let on_csv = Callback::new(|_: ()| {
        let rows = rows::build_rows(&MARKET_SEGMENTS);
        if let Err(err) = export_csv(&rows, "market_segments.csv") {
            log::error!("CSV export failed: {err}");
        }
    });

    let json = to_json_pretty(&*MARKET_SEGMENTS).unwrap_or_else(|err| {
        log::error!("JSON build failed: {err}");
        String::new()
    });

    view! {
        <PageFrame module_key="market-intelligence">
            <PageHeader title="Market Intelligence" subtitle="Segment share and growth">
                <ExportActions on_csv=on_csv json=json />
            </PageHeader>

            <div class="stat-grid stat-grid--cols-2">
                {leader.map(|segment| view! {
                    <StatCard
                        label="Leading Segment"
                        icon_name="bar-chart"
                        value=segment.share_percent
                        format={ValueFormat::Percent { decimals: 1 }}
                        subtitle=segment.segment
                    />
                })}
                {fastest.map(|segment| view! {
                    <StatCard
                        label="Fastest Growing"
                        icon_name="trending-up"
                        value=segment.growth_percent
                        format={ValueFormat::Percent { decimals: 1 }}
                        subtitle=segment.segment
                    />
                })}
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Market Segments"</CardTitle>
                </CardHeader>
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Segment"</th>
                                <th class="data-table__num">"Share"</th>
                                <th class="data-table__num">"Growth"</th>
                                <th class="data-table__num">"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {segment_rows.into_iter().map(|row| {
                                let variant = if row.growth_up { "success" } else { "error" };
                                view! {
                                    <tr>
                                        <td>{row.segment}</td>
                                        <td class="data-table__num">{row.share}</td>
                                        <td class="data-table__num">
                                            <Badge variant=variant>{row.growth}</Badge>
                                        </td>
                                        <td class="data-table__num">{row.value}</td>
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
