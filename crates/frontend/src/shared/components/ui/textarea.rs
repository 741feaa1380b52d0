use leptos::prelude::*;

use super::input::FieldMessage;

/// Multi-line text input; the character count is shown under filled values
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help: Option<String>,
) -> impl IntoView {
    let length = move || value.with(|v| v.chars().count());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=move || id.get()>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <textarea
                id=move || id.get()
                class="form__textarea"
                class:form__textarea--invalid=move || error.with(|e| e.is_some())
                placeholder=move || placeholder.get()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                rows=rows.unwrap_or(3)
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
            <Show when=move || { length() > 0 }>
                <div class="form__counter">{move || format!("{} characters", length())}</div>
            </Show>
            <FieldMessage error=error help=help.unwrap_or_default() />
        </div>
    }
}
