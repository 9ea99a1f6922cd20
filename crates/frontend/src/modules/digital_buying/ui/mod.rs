use contracts::fixtures::SUPPLIERS;
use contracts::shared::ValueFormat;
use leptos::prelude::*;

use super::rows;
use crate::shared::components::{
    Badge, Card, CardContent, CardHeader, CardTitle, ExportActions, PageHeader, StatCard,
};
use crate::shared::export::{export_csv, to_json_pretty};
use crate::shared::page_frame::PageFrame;

#[component]
pub fn DigitalBuyingPage() -> impl IntoView {
    let supplier_rows = rows::build_rows(&SUPPLIERS);
    let orders = rows::total_orders(&SUPPLIERS);
    let value = rows::total_value(&SUPPLIERS);

    let on_csv = Callback::new(|_: ()| {
        let rows = rows::build_rows(&SUPPLIERS);
        if let Err(err) = export_csv(&rows, "suppliers.csv") {
            log::error!("CSV export failed: {err}");
        }
    });

    let json = to_json_pretty(&*SUPPLIERS).unwrap_or_else(|err| {
        log::error!("JSON build failed: {err}");
        String::new()
    });

    view! {
        <PageFrame module_key="digital-buying">
            <PageHeader title="Digital Buying" subtitle="Supplier scorecard">
                <ExportActions on_csv=on_csv json=json />
            </PageHeader>

            <div class="stat-grid stat-grid--cols-2">
                <StatCard
                    label="Purchase Orders"
                    icon_name="truck"
                    value={orders as f64}
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Order Value"
                    icon_name="dollar-sign"
                    value=value
                    format=ValueFormat::usd()
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Suppliers"</CardTitle>
                </CardHeader>
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Supplier"</th>
                                <th class="data-table__num">"Orders"</th>
                                <th class="data-table__num">"Value"</th>
                                <th class="data-table__num">"On-Time"</th>
                                <th class="data-table__num">"Quality"</th>
                                <th>"Rating"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {supplier_rows.into_iter().map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.supplier}</td>
                                        <td class="data-table__num">{row.orders}</td>
                                        <td class="data-table__num">{row.value}</td>
                                        <td class="data-table__num">{row.on_time}</td>
                                        <td class="data-table__num">{row.quality}</td>
                                        <td>
                                            <Badge variant=row.rating.badge_variant()>
                                                {row.rating.label()}
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
