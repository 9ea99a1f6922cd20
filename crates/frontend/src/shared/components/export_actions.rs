//! Export actions rendered in every module page header: CSV download
//! and copy-as-JSON with a transient confirmation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::clipboard::copy_to_clipboard;

#[component]
pub fn ExportActions(
    /// Performs the CSV download for the page's table.
    on_csv: Callback<()>,
    /// Pretty-printed JSON payload for the clipboard.
    json: String,
) -> impl IntoView {
    let copied = RwSignal::new(false);
    let json = StoredValue::new(json);

    let copy_json = move |_| {
        copy_to_clipboard(&json.get_value());
        copied.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1_500).await;
            copied.set(false);
        });
    };

    view! {
        <div class="export-actions">
            <button class="btn btn--secondary" on:click=move |_| on_csv.run(())>
                "Export CSV"
            </button>
            <button class="btn btn--secondary" on:click=copy_json>
                {move || if copied.get() { "Copied" } else { "Copy JSON" }}
            </button>
        </div>
    }
}
