use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::table::{ColumnDef, TableHandle, TableRow};

/// Menu of checkboxes showing or hiding the table's hideable columns.
/// Choices persist per table in local storage.
#[component]
pub fn ColumnToggle<T: TableRow>(table: TableHandle<T>, columns: Vec<ColumnDef>) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let hideable: Vec<(String, String)> = columns
        .into_iter()
        .filter(|c| c.hideable)
        .map(|c| (c.id, c.header))
        .collect();

    if hideable.is_empty() {
        return view! { <></> }.into_any();
    }

    view! {
        <div class="column-toggle">
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon("columns")}
                " Columns"
                <Show when=move || { table.hidden_column_count() > 0 }>
                    <span class="badge badge--warning">{move || table.hidden_column_count()}</span>
                </Show>
            </Button>
            <Show when=move || is_open.get()>
                <div class="column-toggle__dropdown" on:mouseleave=move |_| is_open.set(false)>
                    {hideable.clone().into_iter().map(|(id, header)| {
                        let id_for_check = id.clone();
                        view! {
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    class="form__checkbox"
                                    prop:checked=move || table.is_column_visible(&id_for_check)
                                    on:change=move |_| table.toggle_column(id.clone())
                                />
                                <span class="form__checkbox-label">{header}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
