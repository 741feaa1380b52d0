use leptos::prelude::*;
use thaw::*;

/// Row selection checkbox; clicks do not reach the row
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    /// Row id, used for the accessible label
    #[prop(into)]
    row_id: String,
) -> impl IntoView {
    let aria_label = format!("Select row {}", row_id);

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=aria_label
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}
