use contracts::fixtures::{KPI_SUMMARY, SALES_BY_MONTH};
use contracts::shared::ValueFormat;
use leptos::prelude::*;

use super::rows;
use crate::shared::components::{
    Badge, Card, CardContent, CardHeader, CardTitle, ExportActions, PageHeader, StatCard,
};
use crate::shared::export::{export_csv, to_json_pretty};
use crate::shared::page_frame::PageFrame;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let kpi = KPI_SUMMARY.clone();
    let sales_rows = rows::build_rows(&SALES_BY_MONTH);

    let on_csv = Callback::new(|_: ()| {
        let rows = rows::build_rows(&SALES_BY_MONTH);
        if let Err(err) = export_csv(&rows, "monthly_sales.csv") {
            log::error!("CSV export failed: {err}");
        }
    });

    let json = to_json_pretty(&*SALES_BY_MONTH).unwrap_or_else(|err| {
        log::error!("JSON build failed: {err}");
        String::new()
    });

    view! {
        <PageFrame module_key="dashboard">
            <PageHeader title="Dashboard" subtitle="Retail performance overview">
                <ExportActions on_csv=on_csv json=json />
            </PageHeader>

            <div class="stat-grid stat-grid--cols-4">
                <StatCard
                    label="Total Revenue"
                    icon_name="dollar-sign"
                    value=kpi.total_revenue
                    format=ValueFormat::usd()
                    change_percent=kpi.revenue_growth
                />
                <StatCard
                    label="Total Orders"
                    icon_name="shopping-cart"
                    value={kpi.total_orders as f64}
                    format=ValueFormat::Integer
                    change_percent=kpi.orders_growth
                />
                <StatCard
                    label="Inventory Value"
                    icon_name="boxes"
                    value=kpi.inventory_value
                    format=ValueFormat::usd()
                />
                <StatCard
                    label="Avg Margin"
                    icon_name="percent"
                    value=kpi.avg_margin_percent
                    format={ValueFormat::Percent { decimals: 1 }}
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Monthly Sales"</CardTitle>
                </CardHeader>
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Period"</th>
                                <th class="data-table__num">"Revenue"</th>
                                <th class="data-table__num">"Units"</th>
                                <th class="data-table__num">"Growth"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {sales_rows.into_iter().map(|row| {
                                let variant = if row.growth_up { "success" } else { "error" };
                                view! {
                                    <tr>
                                        <td>{row.period}</td>
                                        <td class="data-table__num">{row.revenue}</td>
                                        <td class="data-table__num">{row.units}</td>
                                        <td class="data-table__num">
                                            <Badge variant=variant>{row.growth}</Badge>
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
