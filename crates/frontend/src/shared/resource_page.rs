//! CRUD page over one REST collection.
//!
//! Domain pages only declare their columns, filters and form fields; loading,
//! dialogs, bulk delete and export all happen here.

use std::marker::PhantomData;

use contracts::shared::table::SortOrder;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thaw::*;

use crate::shared::api::RestResource;
use crate::shared::components::bulk_action_bar::BulkAction;
use crate::shared::components::table::DynamicServerTable;
use crate::shared::config::AppConfig;
use crate::shared::forms::{FieldConfig, FormValues};
use crate::shared::icons::icon;
use crate::shared::modal::{ConfirmDialog, FormDialog};
use crate::shared::table::{use_table_state, ColumnDef, FilterDef, TableRow as Row, TableSettings};
use crate::system::auth::context::use_auth;

#[derive(Clone)]
enum Dialog<T> {
    Closed,
    Create,
    Edit(T),
    Delete(Vec<T>),
}

pub fn confirm_message(count: usize) -> String {
    match count {
        1 => "Delete this record? This cannot be undone.".to_string(),
        n => format!("Delete {} records? This cannot be undone.", n),
    }
}

/// Outcome of a bulk delete; every row is attempted even after a failure
pub fn summarize_deletes(total: usize, errors: &[String]) -> Result<(), String> {
    match errors {
        [] => Ok(()),
        [only] if total == 1 => Err(only.clone()),
        [first, ..] => Err(format!(
            "{} of {} records could not be deleted: {}",
            errors.len(),
            total,
            first
        )),
    }
}

#[component]
pub fn ResourcePage<T>(
    /// Page heading
    title: &'static str,
    /// Collection path, e.g. `/api/brokers`
    path: &'static str,
    /// Namespace of the persisted column visibility
    table_key: &'static str,
    /// Singular noun used on the create button
    item_name: &'static str,
    columns: Vec<ColumnDef>,
    #[prop(optional)]
    filters: Vec<FilterDef>,
    /// Create/edit form; no form means a read-only page
    #[prop(optional)]
    fields: Vec<FieldConfig>,
    #[prop(optional)]
    search_fields: Vec<String>,
    #[prop(optional)]
    default_sort: Option<(String, SortOrder)>,
    /// Row type marker; pages name it as `<ResourcePage<Broker> .../>`
    #[prop(optional)]
    _row: PhantomData<T>,
) -> impl IntoView
where
    T: Row + Serialize + DeserializeOwned,
{
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::load);
    let resource = RestResource::new(path, use_auth(), config.api.port);

    let settings = TableSettings {
        page_size: config.table.page_size,
        row_id_field: config.table.row_id_field.clone(),
        search_fields,
        default_sort,
    };
    let table = use_table_state(
        table_key,
        settings,
        None,
        config.table.debounce_ms,
        move |params| async move { resource.list::<T>(params).await },
    );

    let editable = !fields.is_empty();
    let fields = StoredValue::new(fields);
    let dialog: RwSignal<Dialog<T>> = RwSignal::new(Dialog::Closed);
    let delete_pending = RwSignal::new(false);
    let delete_error: RwSignal<Option<String>> = RwSignal::new(None);

    let close = Callback::new(move |_| {
        delete_error.set(None);
        dialog.set(Dialog::Closed);
    });
    let saved = move || {
        dialog.set(Dialog::Closed);
        table.refresh();
    };

    let confirm_delete = Callback::new(move |_| {
        let rows = match dialog.get_untracked() {
            Dialog::Delete(rows) => rows,
            _ => return,
        };
        let ids: Vec<String> = table.with_untracked(|c| rows.iter().map(|r| c.row_id(r)).collect());
        delete_pending.set(true);
        delete_error.set(None);
        spawn_local(async move {
            let mut errors = Vec::new();
            for id in &ids {
                if let Err(e) = resource.delete(id).await {
                    log::error!("Delete {}/{} failed: {}", resource.path(), id, e);
                    errors.push(e.to_string());
                }
            }
            delete_pending.try_set(false);
            let outcome = summarize_deletes(ids.len(), &errors);
            if errors.len() < ids.len() {
                table.clear_selection();
                table.refresh();
            }
            match outcome {
                Ok(()) => {
                    log::info!("Deleted {} record(s) from {}", ids.len(), resource.path());
                    dialog.try_set(Dialog::Closed);
                }
                Err(message) => {
                    delete_error.try_set(Some(message));
                }
            }
        });
    });

    let bulk_actions = vec![BulkAction::new(
        "Delete",
        "delete",
        Callback::new(move |rows: Vec<T>| {
            if !rows.is_empty() {
                dialog.set(Dialog::Delete(rows));
            }
        }),
    )
    .primary()];

    let dialog_view = move || match dialog.get() {
        Dialog::Closed => view! { <></> }.into_any(),
        Dialog::Create => view! {
            <FormDialog
                title=format!("New {}", item_name)
                fields=fields.get_value()
                on_submit=move |payload: Value| async move {
                    resource
                        .create::<Value, Value>(&payload)
                        .await
                        .map_err(|e| e.to_string())?;
                    saved();
                    Ok::<(), String>(())
                }
                on_close=close
            />
        }
        .into_any(),
        Dialog::Edit(row) => {
            let id = table.with_untracked(|c| c.row_id(&row));
            let record = serde_json::to_value(&row).unwrap_or(Value::Null);
            let initial = fields.with_value(|fs| FormValues::from_record(fs, &record));
            view! {
                <FormDialog
                    title=format!("Edit {}", item_name)
                    fields=fields.get_value()
                    initial=initial
                    on_submit=move |payload: Value| {
                        let id = id.clone();
                        async move {
                            resource
                                .update::<Value, Value>(&id, &payload)
                                .await
                                .map_err(|e| e.to_string())?;
                            saved();
                            Ok::<(), String>(())
                        }
                    }
                    on_close=close
                />
            }
            .into_any()
        }
        Dialog::Delete(rows) => view! {
            <ConfirmDialog
                title="Confirm delete"
                message=confirm_message(rows.len())
                on_confirm=confirm_delete
                on_close=close
                pending=delete_pending
                error=Signal::derive(move || delete_error.get())
            />
        }
        .into_any(),
    };

    let on_edit = editable.then(|| Callback::new(move |row: T| dialog.set(Dialog::Edit(row))));
    let on_delete = Callback::new(move |row: T| dialog.set(Dialog::Delete(vec![row])));

    view! {
        <div class="page">
            <h1 class="page__title">{title}</h1>
            <DynamicServerTable
                table=table
                columns=columns
                title=title
                export_name=table_key
                filters=filters
                page_size_options=config.table.page_size_options.clone()
                export_formats=config.export
                bulk_actions=bulk_actions
                on_edit=on_edit
                on_delete=on_delete
            >
                {editable.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| dialog.set(Dialog::Create)
                    >
                        {icon("plus")}
                        {format!(" New {}", item_name)}
                    </Button>
                })}
            </DynamicServerTable>
            {dialog_view}
        </div>
    }
}
