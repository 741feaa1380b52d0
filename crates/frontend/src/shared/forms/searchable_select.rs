use contracts::shared::table::TableParams;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::field::SelectOption;
use crate::shared::api::RestResource;
use crate::shared::components::ui::FieldMessage;
use crate::shared::config::AppConfig;
use crate::shared::table::format::plain_text;
use crate::system::auth::context::use_auth;

const LOOKUP_LIMIT: usize = 10;
const LOOKUP_DELAY_MS: u32 = 300;

/// Parameters of a lookup, or `None` while the query is too short
pub fn lookup_params(query: &str, label_field: &str, min_query: usize) -> Option<TableParams> {
    let query = query.trim();
    if query.chars().count() < min_query.max(1) {
        return None;
    }
    let mut params = TableParams::first_page(LOOKUP_LIMIT);
    params.search = Some(query.to_string());
    params.search_fields = vec![label_field.to_string()];
    Some(params)
}

/// Options built from lookup rows; rows without a value are skipped
pub fn to_options(rows: &[Value], value_field: &str, label_field: &str) -> Vec<SelectOption> {
    rows.iter()
        .filter_map(|row| {
            let value = plain_text(row.get(value_field)?);
            if value.is_empty() {
                return None;
            }
            let label = row
                .get(label_field)
                .map(plain_text)
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| value.clone());
            Some(SelectOption::new(value, label))
        })
        .collect()
}

/// Select whose options are looked up remotely while the user types
#[component]
pub fn SearchableSelect(
    #[prop(into)]
    label: String,
    /// Collection path, e.g. `/api/brokers`
    endpoint: &'static str,
    #[prop(into)]
    value_field: String,
    #[prop(into)]
    label_field: String,
    min_query: usize,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help: Option<String>,
) -> impl IntoView {
    let auth = use_auth();
    let port = use_context::<AppConfig>()
        .map(|c| c.api.port)
        .unwrap_or_else(|| AppConfig::load().api.port);
    let resource = RestResource::new(endpoint, auth, port);

    let query = RwSignal::new(String::new());
    let options: RwSignal<Vec<SelectOption>> = RwSignal::new(Vec::new());
    let selected_label: RwSignal<Option<String>> = RwSignal::new(None);
    let is_open = RwSignal::new(false);
    let is_loading = RwSignal::new(false);
    let lookup_error: RwSignal<Option<String>> = RwSignal::new(None);
    let generation = StoredValue::new(0u64);
    let fields = StoredValue::new((value_field, label_field));

    let lookup = move |text: String| {
        let next = generation.get_value() + 1;
        generation.set_value(next);

        let Some(params) = fields.with_value(|(_, label_field)| lookup_params(&text, label_field, min_query)) else {
            options.set(Vec::new());
            return;
        };

        spawn_local(async move {
            TimeoutFuture::new(LOOKUP_DELAY_MS).await;
            if generation.try_get_value() != Some(next) {
                return;
            }
            is_loading.set(true);
            let result = resource.list::<Value>(params).await;
            if generation.try_get_value() != Some(next) {
                return;
            }
            is_loading.set(false);
            match result {
                Ok(response) => {
                    let found = fields.with_value(|(value_field, label_field)| {
                        to_options(&response.data, value_field, label_field)
                    });
                    lookup_error.set(None);
                    options.set(found);
                }
                Err(e) => {
                    log::error!("Lookup on {} failed: {}", resource.path(), e);
                    lookup_error.set(Some(e.to_string()));
                    options.set(Vec::new());
                }
            }
        });
    };

    let display = move || {
        if is_open.get() {
            query.get()
        } else {
            selected_label.get().unwrap_or_else(|| value.get())
        }
    };
    let hint = move || {
        let typed = query.with(|q| q.trim().chars().count());
        if lookup_error.with(Option::is_some) {
            lookup_error.get()
        } else if is_loading.get() {
            Some("Searching...".to_string())
        } else if typed < min_query {
            Some(format!("Type at least {} characters", min_query))
        } else if options.with(Vec::is_empty) {
            Some("Nothing found".to_string())
        } else {
            None
        }
    };

    view! {
        <div class="form__group searchable-select">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                type="text"
                class=move || {
                    if error.with(|e| e.is_some()) {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                placeholder=placeholder.filter(|p| !p.is_empty()).unwrap_or_else(|| "Type to search...".to_string())
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=display
                on:focus=move |_| {
                    query.set(String::new());
                    is_open.set(true);
                }
                on:blur=move |_| is_open.set(false)
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    query.set(text.clone());
                    lookup(text);
                }
            />
            <Show when=move || is_open.get()>
                <div class="searchable-select__dropdown">
                    {move || hint().map(|h| view! { <div class="searchable-select__hint">{h}</div> })}
                    {move || options.get().into_iter().map(|option| {
                        let chosen = option.clone();
                        view! {
                            <div
                                class="searchable-select__option"
                                on:mousedown=move |ev| {
                                    // Fires before blur closes the dropdown
                                    ev.prevent_default();
                                    selected_label.set(Some(chosen.label.clone()));
                                    is_open.set(false);
                                    on_change.run(chosen.value.clone());
                                }
                            >
                                {option.label}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
            <FieldMessage error=error help=help.unwrap_or_default() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_queries_do_not_look_up() {
        assert!(lookup_params("a", "name", 2).is_none());
        assert!(lookup_params("  a  ", "name", 2).is_none());
        assert!(lookup_params("", "name", 0).is_none());

        let params = lookup_params(" ac ", "name", 2).unwrap();
        assert_eq!(params.search.as_deref(), Some("ac"));
        assert_eq!(params.search_fields, vec!["name".to_string()]);
        assert_eq!(params.limit, LOOKUP_LIMIT);
        assert!(params.cursor.is_none());
    }

    #[test]
    fn test_rows_become_options() {
        let rows = vec![
            json!({"id": "b1", "name": "Acme"}),
            json!({"id": 7, "name": null}),
            json!({"name": "No id"}),
        ];
        let options = to_options(&rows, "id", "name");
        assert_eq!(
            options,
            vec![SelectOption::new("b1", "Acme"), SelectOption::new("7", "7")]
        );
    }
}
