//! Card primitives: bordered container plus structural children.
//!
//! `Card` wraps the Thaw card container; header, title, and content
//! are plain structural elements. Every component accepts an optional
//! class that is appended after the default, never replacing it.

use leptos::prelude::*;
use thaw::Card as CardContainer;

/// Bordered container for arbitrary content.
#[component]
pub fn Card(
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    view! {
        <CardContainer attr:class=full_class>
            {children()}
        </CardContainer>
    }
}

/// Header zone of a card.
#[component]
pub fn CardHeader(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card__header".to_string()
    } else {
        format!("card__header {class}")
    };

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Title line inside a card header.
#[component]
pub fn CardTitle(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card__title".to_string()
    } else {
        format!("card__title {class}")
    };

    view! {
        <h3 class=full_class>
            {children()}
        </h3>
    }
}

/// Body zone of a card.
#[component]
pub fn CardContent(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "card__content".to_string()
    } else {
        format!("card__content {class}")
    };

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
