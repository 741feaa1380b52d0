//! Select-all checkbox of the loaded page, with an indeterminate state when
//! only some of its rows are selected.

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::shared::table::PageSelection;

#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<PageSelection>,
    /// `true` selects the whole page, `false` clears it
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` is a DOM property only, it has no attribute
    Effect::new(move |_| {
        let partial = state.get() == PageSelection::Partial;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label=move || match state.get() {
                    PageSelection::All => "Deselect all rows on this page",
                    _ => "Select all rows on this page",
                }
                prop:checked=move || state.get() == PageSelection::All
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
