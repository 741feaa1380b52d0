use std::future::Future;

use leptos::ev;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

use crate::shared::forms::{AutoForm, FieldConfig, FormValues};
use crate::shared::icons::icon;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Create or edit dialog around an [`AutoForm`].
/// A failed submit keeps the dialog open with the error above the fields.
#[component]
pub fn FormDialog<F, Fut>(
    #[prop(into)]
    title: String,
    fields: Vec<FieldConfig>,
    #[prop(optional)]
    initial: Option<FormValues>,
    on_submit: F,
    on_close: Callback<()>,
    #[prop(optional, into)]
    submit_label: Option<String>,
) -> impl IntoView
where
    F: Fn(Value) -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let form = match initial {
        Some(initial) => view! {
            <AutoForm
                fields=fields
                initial=initial
                on_submit=on_submit
                on_cancel=on_close
                submit_label=submit_label.unwrap_or_else(|| "Save".to_string())
            />
        }
        .into_any(),
        None => view! {
            <AutoForm
                fields=fields
                on_submit=on_submit
                on_cancel=on_close
                submit_label=submit_label.unwrap_or_else(|| "Create".to_string())
            />
        }
        .into_any(),
    };

    view! {
        <Modal title=title on_close=on_close>
            {form}
        </Modal>
    }
}

/// Yes/no question before a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
    /// Disables both buttons while the action runs
    #[prop(into)]
    pending: Signal<bool>,
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal title=title on_close=on_close>
            <div class="confirm-dialog">
                <p class="confirm-dialog__message">{message}</p>
                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">
                        {icon("alert")}
                        <span>{e}</span>
                    </div>
                })}
                <Flex justify=FlexJustify::End>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=pending
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                        disabled=pending
                    >
                        {icon("delete")}
                        {format!(" {}", confirm_label)}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
