//! Header cell that sorts the server table when clicked.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Balance"
//!     field="account_balance"
//!     sort=Signal::derive(move || table.with(|c| c.sort().map(|(f, o)| (f.to_string(), o))))
//!     on_sort=Callback::new(move |field| table.toggle_sort(field))
//! />
//! ```

use contracts::shared::table::SortOrder;
use leptos::prelude::*;
use thaw::*;

use crate::shared::table::Align;

/// Arrow shown next to a header
pub fn sort_indicator(current: Option<(&str, SortOrder)>, field: &str) -> &'static str {
    match current {
        Some((sorted, SortOrder::Asc)) if sorted == field => " ▲",
        Some((sorted, SortOrder::Desc)) if sorted == field => " ▼",
        _ => " ⇅",
    }
}

pub fn sort_class(current: Option<(&str, SortOrder)>, field: &str) -> &'static str {
    match current {
        Some((sorted, _)) if sorted == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Value sent as `sortBy`
    #[prop(into)]
    field: String,
    #[prop(into)]
    sort: Signal<Option<(String, SortOrder)>>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
    #[prop(optional)]
    align: Align,
) -> impl IntoView {
    let field = StoredValue::new(field);
    let current = move || sort.get();

    let header_style = format!(
        "cursor: pointer; padding-right: 12px; {}{}",
        align.style(),
        if align == Align::Right { " justify-content: flex-end;" } else { "" }
    );

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field.get_value())
            >
                {label}
                <span class=move || {
                    let current = current();
                    field.with_value(|f| sort_class(current.as_ref().map(|(s, o)| (s.as_str(), *o)), f))
                }>
                    {move || {
                        let current = current();
                        field.with_value(|f| sort_indicator(current.as_ref().map(|(s, o)| (s.as_str(), *o)), f))
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(None, "name"), " ⇅");
        assert_eq!(sort_indicator(Some(("name", SortOrder::Asc)), "name"), " ▲");
        assert_eq!(sort_indicator(Some(("name", SortOrder::Desc)), "name"), " ▼");
        assert_eq!(sort_indicator(Some(("code", SortOrder::Desc)), "name"), " ⇅");
        assert!(sort_class(Some(("name", SortOrder::Asc)), "name").ends_with("--active"));
    }
}
