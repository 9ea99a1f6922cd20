use contracts::fixtures::{KPI_SUMMARY, PLANNING_SEASONS};
use contracts::shared::ValueFormat;
use leptos::prelude::*;

use super::rows;
use crate::shared::components::{
    Card, CardContent, CardHeader, CardTitle, ExportActions, PageHeader, StatCard,
};
use crate::shared::export::{export_csv, to_json_pretty};
use crate::shared::page_frame::PageFrame;

#[component]
pub fn PlanningPlmPage() -> impl IntoView {
    let season_rows = rows::build_rows(&PLANNING_SEASONS);
    let overall = rows::overall_completion(&PLANNING_SEASONS);

    let on_csv = Callback::new(|_: ()| {
        let rows = rows::build_rows(&PLANNING_SEASONS);
        if let Err(err) = export_csv(&rows, "planning_seasons.csv") {
            log::error!("CSV export failed: {err}");
        }
    });

    let json = to_json_pretty(&*PLANNING_SEASONS).unwrap_or_else(|err| {
        log::error!("JSON build failed: {err}");
        String::new()
    });

    view! {
        <PageFrame module_key="planning-plm">
            <PageHeader title="Planning & PLM" subtitle="Season launch pipeline">
                <ExportActions on_csv=on_csv json=json />
            </PageHeader>

            <div class="stat-grid stat-grid--cols-2">
                <StatCard
                    label="Active Products"
                    icon_name="package"
                    value={KPI_SUMMARY.active_products as f64}
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Launch Completion"
                    icon_name="calendar"
                    value=overall
                    format={ValueFormat::Percent { decimals: 1 }}
                    subtitle="across all seasons"
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Seasons"</CardTitle>
                </CardHeader>
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Season"</th>
                                <th class="data-table__num">"Products"</th>
                                <th class="data-table__num">"Launched"</th>
                                <th class="data-table__num">"Pending"</th>
                                <th class="data-table__num">"Completion"</th>
                                <th class="data-table__num">"Revenue"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {season_rows.into_iter().map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.season}</td>
                                        <td class="data-table__num">{row.products}</td>
                                        <td class="data-table__num">{row.launched}</td>
                                        <td class="data-table__num">{row.pending}</td>
                                        <td class="data-table__num">{row.completion}</td>
                                        <td class="data-table__num">{row.revenue}</td>
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
