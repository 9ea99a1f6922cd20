use contracts::fixtures::INVENTORY_BY_CATEGORY;
use contracts::shared::ValueFormat;
use leptos::prelude::*;

use super::rows;
use crate::shared::components::{
    Card, CardContent, CardHeader, CardTitle, ExportActions, PageHeader, StatCard,
};
use crate::shared::export::{export_csv, to_json_pretty};
use crate::shared::page_frame::PageFrame;

#[component]
pub fn InventoryAllocationPage() -> impl IntoView {
    let category_rows = rows::build_rows(&INVENTORY_BY_CATEGORY);
    let stock = rows::total_stock(&INVENTORY_BY_CATEGORY);
    let value = rows::total_value(&INVENTORY_BY_CATEGORY);

    let on_csv = Callback::new(|_: ()| {
        let rows = rows::build_rows(&INVENTORY_BY_CATEGORY);
        if let Err(err) = export_csv(&rows, "inventory_categories.csv") {
            log::error!("CSV export failed: {err}");
        }
    });

    let json = to_json_pretty(&*INVENTORY_BY_CATEGORY).unwrap_or_else(|err| {
        log::error!("JSON build failed: {err}");
        String::new()
    });

    view! {
        <PageFrame module_key="inventory-allocation">
            <PageHeader title="Inventory & Allocation" subtitle="Stock position by category">
                <ExportActions on_csv=on_csv json=json />
            </PageHeader>

            <div class="stat-grid stat-grid--cols-2">
                <StatCard
                    label="Units on Hand"
                    icon_name="boxes"
                    value={stock as f64}
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Stock Value"
                    icon_name="dollar-sign"
                    value=value
                    format=ValueFormat::usd()
                />
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Categories"</CardTitle>
                </CardHeader>
                <CardContent>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Category"</th>
                                <th class="data-table__num">"Stock"</th>
                                <th class="data-table__num">"Value"</th>
                                <th class="data-table__num">"Turnover"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {category_rows.into_iter().map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.category}</td>
                                        <td class="data-table__num">{row.stock}</td>
                                        <td class="data-table__num">{row.value}</td>
                                        <td class="data-table__num">{row.turnover}</td>
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
