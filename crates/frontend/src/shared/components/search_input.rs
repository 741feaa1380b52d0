use leptos::prelude::*;

use crate::shared::icons::icon;

/// Search box of a server table.
///
/// Every keystroke is reported through `on_input`; debouncing belongs to the
/// table state. The clear button resets the search at once.
#[component]
pub fn SearchInput(
    /// Raw text, as typed
    #[prop(into)]
    value: Signal<String>,
    /// Whether a committed query currently filters the table
    #[prop(into)]
    active: Signal<bool>,
    on_input: Callback<String>,
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if active.get() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || !value.with(String::is_empty)>
                <button
                    class="search-input__clear"
                    title="Clear search"
                    on:click=move |_| on_clear.run(())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
