use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::table::{FilterDef, FilterKind, TableHandle, TableRow, ALL_VALUE};

/// Collapsible filter area of a server table, with the active filters shown as
/// removable tags and the pagination in its header
#[component]
pub fn FilterPanel<T: TableRow>(
    table: TableHandle<T>,
    filters: Vec<FilterDef>,
    /// Pagination controls shown in the header
    children: Children,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let defs = StoredValue::new(filters);
    let active_count = move || table.with(|c| c.filters().len());
    let has_filters = !defs.with_value(Vec::is_empty);

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    <Show when=move || { active_count() > 0 }>
                        <span class="badge badge--primary">{active_count}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {children()}
                </div>
            </div>

            <Show when=move || has_filters>
                <div class=move || {
                    if is_expanded.get() {
                        "filter-panel__collapsible filter-panel__collapsible--expanded"
                    } else {
                        "filter-panel__collapsible filter-panel__collapsible--collapsed"
                    }
                }>
                    <div class="filter-panel-content">
                        {defs.get_value().into_iter().map(|def| view! {
                            <FilterControl table=table def=def />
                        }).collect_view()}
                    </div>
                </div>
            </Show>

            <div class="filter-panel__tags">
                {move || {
                    let badges = defs.with_value(|defs| table.with(|c| c.filters().badges(defs)));
                    let any = !badges.is_empty();
                    view! {
                        {badges.into_iter().map(|badge| {
                            let field = badge.field.clone();
                            view! {
                                <FilterTag
                                    label=format!("{}: {}", badge.field_label, badge.text)
                                    on_remove=Callback::new(move |_| table.remove_filter(field.clone(), None))
                                />
                            }
                        }).collect_view()}
                        <Show when=move || any>
                            <button class="filter-panel__clear" on:click=move |_| table.clear_all_filters()>
                                "Clear all"
                            </button>
                        </Show>
                    }
                }}
            </div>
        </div>
    }
}

/// Select for single filters, checkbox group for multi filters
#[component]
fn FilterControl<T: TableRow>(table: TableHandle<T>, def: FilterDef) -> impl IntoView {
    let field = def.field.clone();
    match def.kind {
        FilterKind::Single => {
            let current = {
                let field = field.clone();
                move || table.with(|c| c.filters().single_value(&field))
            };
            view! {
                <label class="filter-control">
                    <span class="filter-control__label">{def.label}</span>
                    <select
                        class="form__select"
                        prop:value=current.clone()
                        on:change=move |ev| table.set_single_filter(field.clone(), event_target_value(&ev))
                    >
                        <option value=ALL_VALUE>"All"</option>
                        {def.options.into_iter().map(|option| {
                            let value = option.value.clone();
                            let current = current.clone();
                            view! {
                                <option value=option.value selected=move || current() == value>
                                    {option.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </label>
            }
            .into_any()
        }
        FilterKind::Multi => view! {
            <fieldset class="filter-control filter-control--multi">
                <legend class="filter-control__label">{def.label}</legend>
                {def.options.into_iter().map(|option| {
                    let field_for_check = field.clone();
                    let field_for_change = field.clone();
                    let value_for_check = option.value.clone();
                    let value_for_change = option.value.clone();
                    view! {
                        <label class="form__checkbox-wrapper">
                            <input
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || table.with(|c| c.filters().is_active(&field_for_check, &value_for_check))
                                on:change=move |ev| table.toggle_multi_filter(
                                    field_for_change.clone(),
                                    value_for_change.clone(),
                                    event_target_checked(&ev),
                                )
                            />
                            <span class="form__checkbox-label">{option.label}</span>
                        </label>
                    }
                }).collect_view()}
            </fieldset>
        }
        .into_any(),
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
