use leptos::prelude::*;

use super::input::FieldMessage;
use crate::shared::forms::SelectOption;

/// Labelled select; an empty first entry stands for "no value"
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    options: Vec<SelectOption>,
    /// Text of the empty entry; `None` omits it
    #[prop(optional, into)]
    empty_label: Option<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get().unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {empty_label.map(|text| view! {
                    <option value="" selected=move || value.with(String::is_empty)>{text}</option>
                })}
                {options.into_iter().map(|option| {
                    let option_value = option.value.clone();
                    let is_selected = move || value.with(|v| *v == option_value);
                    view! {
                        <option value=option.value selected=is_selected>
                            {option.label}
                        </option>
                    }
                }).collect_view()}
            </select>
            <FieldMessage error=error />
        </div>
    }
}
