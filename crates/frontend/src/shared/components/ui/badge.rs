use leptos::prelude::*;

use crate::shared::table::BadgeVariant;

/// Coloured pill for enum-like cell values.
/// The full text doubles as a tooltip since table cells truncate.
#[component]
pub fn Badge(variant: BadgeVariant, #[prop(into)] text: String) -> impl IntoView {
    let title = text.clone();
    view! {
        <span class=variant.class() title=title>
            {text}
        </span>
    }
}
