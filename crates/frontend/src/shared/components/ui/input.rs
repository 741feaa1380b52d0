use leptos::prelude::*;

/// Validation error or help text under a form control
#[component]
pub fn FieldMessage(
    #[prop(into)] error: MaybeProp<String>,
    #[prop(optional, into)] help: Option<String>,
) -> impl IntoView {
    let help = help.filter(|h| !h.is_empty());
    move || match error.get() {
        Some(message) => view! { <div class="form__error">{message}</div> }.into_any(),
        None => help
            .clone()
            .map(|h| view! { <div class="form__help">{h}</div> }.into_any())
            .unwrap_or_else(|| view! { <></> }.into_any()),
    }
}

/// Labelled input with an inline error
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "password", "email", "number", "date", "datetime-local"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional, into)]
    max: MaybeProp<String>,
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help: Option<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let class = move || {
        if error.with(|e| e.is_some()) {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                class=class
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                min=move || min.get()
                max=move || max.get()
                step=move || step.get()
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <FieldMessage error=error help=help.unwrap_or_default() />
        </div>
    }
}
