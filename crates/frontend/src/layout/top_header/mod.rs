//! TopHeader component - application top bar.
//!
//! Contains:
//! - Brand title and the data-as-of stamp
//! - Toggle button for the navigation sidebar

use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::fixtures::KPI_SUMMARY;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let as_of = format!("Data as of {}", format_date(KPI_SUMMARY.as_of));

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Retail Pulse"</span>
                <span class="top-header__subtitle">{as_of}</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
            </div>
        </div>
    }
}
