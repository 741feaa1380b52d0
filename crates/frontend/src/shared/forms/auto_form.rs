//! Form rendered from a list of [`FieldConfig`]s.
//!
//! The form owns a [`FormState`]; the submit handler receives the validated
//! JSON payload and reports success or a message to show above the fields.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use super::field::{FieldConfig, FieldKind};
use super::searchable_select::SearchableSelect;
use super::state::FormState;
use super::value::{FormValue, FormValues};
use crate::shared::components::ui::{Checkbox, FieldMessage, Input, Select, Textarea};
use crate::shared::icons::icon;

type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;
type SubmitFn = Rc<dyn Fn(Value) -> SubmitFuture>;

fn number_attr(value: Option<f64>) -> Option<String> {
    value.map(|v| v.to_string())
}

/// HTML input type of the single-line kinds
fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Number { .. } => "number",
        FieldKind::Date => "date",
        FieldKind::DateTime => "datetime-local",
        _ => "text",
    }
}

#[component]
pub fn AutoForm<F, Fut>(
    fields: Vec<FieldConfig>,
    /// Values of the record being edited; defaults otherwise
    #[prop(optional)]
    initial: Option<FormValues>,
    on_submit: F,
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
    #[prop(optional, into)]
    submit_label: Option<String>,
) -> impl IntoView
where
    F: Fn(Value) -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let initial = initial.unwrap_or_else(|| FormValues::initial(&fields));
    let form = RwSignal::new(FormState::new(initial));
    let fields = StoredValue::new(fields);
    let submit: SubmitFn = Rc::new(move |payload| Box::pin(on_submit(payload)) as SubmitFuture);
    let submit = StoredValue::new_local(submit);
    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = fields
            .with_value(|fs| form.try_update(|f| f.begin_submit(fs)))
            .flatten()
        else {
            return;
        };
        let Some(pending) = submit.try_with_value(|f| f(payload)) else {
            return;
        };
        spawn_local(async move {
            let result = pending.await;
            if let Err(e) = &result {
                log::warn!("Form submit failed: {}", e);
            }
            if form.try_update(|f| f.finish_submit(result)).is_none() {
                log::debug!("form closed before its submit resolved");
            }
        });
    };

    view! {
        <form class="auto-form" on:submit=handle_submit novalidate=true>
            {move || form.with(|f| f.submit_error().map(str::to_string)).map(|message| view! {
                <div class="alert alert--error">
                    {icon("alert")}
                    <span>{message}</span>
                </div>
            })}

            {fields.get_value().into_iter().map(|field| {
                let rule = StoredValue::new(field.clone());
                view! {
                    <Show when=move || rule.with_value(|r| form.with(|f| r.is_visible(f.values())))>
                        {render_field(rule.get_value(), form, fields, submitting)}
                    </Show>
                }
            }).collect_view()}

            <div class="auto-form__actions">
                {on_cancel.map(|cancel| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| cancel.run(())
                        disabled=submitting
                    >
                        "Cancel"
                    </Button>
                })}
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || submitting.get()
                >
                    {move || {
                        if submitting.get() {
                            "Saving...".to_string()
                        } else {
                            submit_label.clone().unwrap_or_else(|| "Save".to_string())
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

fn render_field(
    field: FieldConfig,
    form: RwSignal<FormState>,
    fields: StoredValue<Vec<FieldConfig>>,
    submitting: Signal<bool>,
) -> AnyView {
    let name = StoredValue::new(field.name.clone());
    let set = move |value: FormValue| {
        name.with_value(|n| fields.with_value(|fs| form.update(|f| f.set(fs, n, value))));
    };
    let text = Signal::derive(move || name.with_value(|n| form.with(|f| f.values().text(n))));
    let error = Signal::derive(move || {
        name.with_value(|n| form.with(|f| f.errors().get(n).map(str::to_string)))
    });
    let disabled = Signal::derive(move || Some(submitting.get()));
    let on_text = Callback::new(move |value: String| set(FormValue::Text(value)));
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let help = field.help.clone().unwrap_or_default();
    let input_id = format!("field-{}", field.name);

    match field.kind.clone() {
        FieldKind::Hidden => view! {
            <input type="hidden" name=field.name prop:value=move || text.get() />
        }
        .into_any(),
        FieldKind::Textarea { rows } => view! {
            <Textarea
                label=field.label
                value=text
                on_input=on_text
                placeholder=placeholder
                disabled=disabled
                required=field.required
                rows=rows
                id=input_id
                error=error
                help=help
            />
        }
        .into_any(),
        FieldKind::Select { options } => view! {
            <Select
                label=field.label
                value=text
                on_change=on_text
                options=options
                empty_label="Select..."
                disabled=disabled
                required=field.required
                id=input_id
                error=error
            />
        }
        .into_any(),
        FieldKind::MultiSelect { options } => {
            let toggle = move |value: String, checked: bool| {
                let mut items = name.with_value(|n| {
                    form.with_untracked(|f| match f.values().get(n) {
                        Some(FormValue::List(items)) => items.clone(),
                        _ => Vec::new(),
                    })
                });
                items.retain(|i| *i != value);
                if checked {
                    items.push(value);
                }
                set(FormValue::List(items));
            };
            view! {
                <fieldset class="form__group form__multiselect">
                    <legend class="form__label">
                        {field.label}
                        {field.required.then(|| view! { <span class="form__required">" *"</span> })}
                    </legend>
                    {options.into_iter().map(|option| {
                        let value = option.value.clone();
                        let value_for_check = option.value.clone();
                        view! {
                            <Checkbox
                                label=option.label
                                checked=Signal::derive(move || name.with_value(|n| form.with(|f| {
                                    matches!(f.values().get(n), Some(FormValue::List(items)) if items.contains(&value_for_check))
                                })))
                                on_change=Callback::new(move |checked| toggle(value.clone(), checked))
                                disabled=disabled
                            />
                        }
                    }).collect_view()}
                    <FieldMessage error=error help=help />
                </fieldset>
            }
            .into_any()
        }
        FieldKind::SearchableSelect {
            endpoint,
            value_field,
            label_field,
            min_query,
        } => view! {
            <SearchableSelect
                label=field.label
                endpoint=endpoint
                value_field=value_field
                label_field=label_field
                min_query=min_query
                value=text
                on_change=on_text
                placeholder=field.placeholder.unwrap_or_default()
                required=field.required
                disabled=disabled
                error=error
                help=help
            />
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <Checkbox
                label=field.label
                checked=Signal::derive(move || {
                    name.with_value(|n| form.with(|f| matches!(f.values().get(n), Some(FormValue::Bool(true)))))
                })
                on_change=Callback::new(move |checked| set(FormValue::Bool(checked)))
                disabled=disabled
                id=input_id
                error=error
                help=help
            />
        }
        .into_any(),
        FieldKind::Number {
            min,
            max,
            step,
            dynamic_min,
            dynamic_max,
        } => {
            // Bounds taken from another field follow its live value
            let bound = move |other: Option<String>, fixed: Option<f64>| {
                Signal::derive(move || {
                    other
                        .as_deref()
                        .and_then(|o| form.with(|f| f.values().number(o)))
                        .or(fixed)
                        .map(|v| v.to_string())
                })
            };
            view! {
                <Input
                    label=field.label
                    value=text
                    on_input=on_text
                    placeholder=placeholder
                    input_type="number"
                    disabled=disabled
                    required=field.required
                    id=input_id
                    min=bound(dynamic_min, min)
                    max=bound(dynamic_max, max)
                    step=number_attr(step).unwrap_or_else(|| "any".to_string())
                    error=error
                    help=help
                />
            }
            .into_any()
        }
        kind => view! {
            <Input
                label=field.label
                value=text
                on_input=on_text
                placeholder=placeholder
                input_type=input_type(&kind)
                disabled=disabled
                required=field.required
                id=input_id
                error=error
                help=help
            />
        }
        .into_any(),
    }
}
