//! Sidebar component: one entry per dashboard module.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::modules::ModuleId;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {ModuleId::ALL.into_iter().map(|module| {
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || ctx.active.get() == module
                        on:click=move |_| {
                            ctx.select_module(module);
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(module.icon())}
                            <span>{module.label()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
