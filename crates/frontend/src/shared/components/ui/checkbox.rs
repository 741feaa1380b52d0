use leptos::prelude::*;

use super::input::FieldMessage;

/// Checkbox with its label on the right; the whole label is clickable
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    help: Option<String>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);

    view! {
        <div class="form__group form__group--inline">
            <label
                class="form__checkbox-wrapper"
                class:form__checkbox-wrapper--disabled=is_disabled
                class:form__checkbox-wrapper--checked=move || checked.get()
            >
                <input
                    id=move || id.get()
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    disabled=is_disabled
                    on:change=move |ev| {
                        if let Some(handler) = on_change {
                            handler.run(event_target_checked(&ev));
                        }
                    }
                />
                <span class="form__checkbox-label">{label}</span>
            </label>
            <FieldMessage error=error help=help.unwrap_or_default() />
        </div>
    }
}
