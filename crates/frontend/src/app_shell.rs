//! Application shell: root layout composition.
//!
//! Wires the `Shell` zones together: module navigation on the left,
//! the active module's page in the center. The active module lives in
//! `AppGlobalContext`; changing it swaps the center content and
//! nothing else.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::registry::render_module_content;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || render_module_content(ctx.active.get())}
                }
                .into_any()
            }
        />
    }
}
