//! PageFrame: standard root wrapper for every module page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`: `"{module}--page"`, e.g. `"demand-pricing--page"`
//!   - `data-module`: the module wire key

use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every module page.
#[component]
pub fn PageFrame(
    /// Module wire key, e.g. `"demand-pricing"`.
    module_key: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page page--module".to_string()
    } else {
        format!("page page--module {class}")
    };

    view! {
        <div
            id=format!("{module_key}--page")
            class=full_class
            data-module=module_key
        >
            {children()}
        </div>
    }
}
