//! Generic server-driven table.
//!
//! Everything the table shows comes from a [`TableHandle`]: rows, cursor
//! pagination, search, filters, sort and selection. Pages only describe the
//! columns and filters and supply the row actions.

use leptos::prelude::*;
use thaw::*;

use super::data_cell::DataCell;
use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_checkbox::TableCellCheckbox;
use super::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::components::bulk_action_bar::{BulkAction, BulkActionBar};
use crate::shared::components::column_toggle::ColumnToggle;
use crate::shared::components::export_menu::ExportMenu;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table_states::{EmptyState, ErrorBanner, ErrorState, LoadingState};
use crate::shared::config::ExportFormats;
use crate::shared::export::{export_rows, ExportFormat};
use crate::shared::icons::icon;
use crate::shared::table::{ColumnDef, FilterDef, TableHandle, TableRow as Row, TableStatus};

#[component]
pub fn DynamicServerTable<T: Row>(
    table: TableHandle<T>,
    columns: Vec<ColumnDef>,
    /// Used for export titles
    #[prop(into)]
    title: String,
    /// File name prefix of exports
    #[prop(into)]
    export_name: String,
    #[prop(optional)]
    filters: Vec<FilterDef>,
    page_size_options: Vec<usize>,
    #[prop(optional, into)]
    export_formats: Option<ExportFormats>,
    #[prop(optional)]
    bulk_actions: Vec<BulkAction<T>>,
    /// Passed as `Option` so pages can decide at runtime
    #[prop(optional_no_strip)]
    on_edit: Option<Callback<T>>,
    #[prop(optional)]
    on_delete: Option<Callback<T>>,
    #[prop(optional, into)]
    search_placeholder: String,
    /// Extra toolbar buttons, rendered before the built-in ones
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let export_formats = export_formats.unwrap_or_else(ExportFormats::none);
    let columns = StoredValue::new(columns);
    let title = StoredValue::new(title);
    let export_name = StoredValue::new(export_name);
    let export_error: RwSignal<Option<String>> = RwSignal::new(None);
    let has_row_actions = on_edit.is_some() || on_delete.is_some();

    let run_export = move |format: ExportFormat, rows: Vec<T>| {
        let result = columns.with_value(|cols| {
            export_rows(
                format,
                &export_formats,
                &export_name.get_value(),
                &title.get_value(),
                cols,
                &rows,
            )
        });
        match result {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::warn!("Export failed: {}", e);
                export_error.set(Some(e.to_string()));
            }
        }
    };
    let on_export_page = Callback::new(move |format: ExportFormat| {
        run_export(format, table.with_untracked(|c| c.data().to_vec()));
    });
    let on_export_selected = Callback::new(move |format: ExportFormat| {
        run_export(format, table.selected_rows());
    });

    let visible_columns = move || {
        columns.with_value(|cols| {
            cols.iter()
                .filter(|c| !c.hideable || table.is_column_visible(&c.id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let sort_signal = Signal::derive(move || {
        table.with(|c| c.sort().map(|(field, order)| (field.to_string(), order)))
    });
    let on_sort = Callback::new(move |field: String| table.toggle_sort(field));

    // Reload error while rows remain on screen; a failed first load uses ErrorState
    let reload_error = Signal::derive(move || {
        table.with(|c| match c.status() {
            TableStatus::Failed => None,
            _ => c.error().map(str::to_string),
        })
    });

    let table_body = move || {
        let rows = table.with(|c| c.data().to_vec());
        let row_id_field = table.with_untracked(|c| c.row_id_field().to_string());
        rows.into_iter()
            .map(|row| {
                let id = row.row_id(&row_id_field);
                let label_id = id.clone();
                let row_for_check = row.clone();
                let checked = Signal::derive(move || table.with(|c| c.is_selected(&row_for_check)));
                let cells = visible_columns()
                    .into_iter()
                    .map(|column| view! { <DataCell column=column row=row.clone() /> })
                    .collect_view();
                let actions_row = row.clone();

                view! {
                    <TableRow>
                        <TableCellCheckbox
                            checked=checked
                            row_id=label_id
                            on_change=Callback::new(move |_| table.toggle_row(id.clone()))
                        />
                        {cells}
                        {has_row_actions.then(|| {
                            let edit_row = actions_row.clone();
                            let delete_row = actions_row.clone();
                            view! {
                                <TableCell>
                                    <div class="table__row-actions">
                                        {on_edit.map(|edit| view! {
                                            <button
                                                class="table__action-btn"
                                                title="Edit"
                                                on:click=move |_| edit.run(edit_row.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                        })}
                                        {on_delete.map(|delete| view! {
                                            <button
                                                class="table__action-btn table__action-btn--danger"
                                                title="Delete"
                                                on:click=move |_| delete.run(delete_row.clone())
                                            >
                                                {icon("delete")}
                                            </button>
                                        })}
                                    </div>
                                </TableCell>
                            }
                        })}
                    </TableRow>
                }
            })
            .collect_view()
    };

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || table.page_selection())
                                on_change=Callback::new(move |selected| table.set_page_selected(selected))
                            />
                            {move || visible_columns().into_iter().map(|column| {
                                if column.sortable {
                                    view! {
                                        <SortableHeaderCell
                                            label=column.header
                                            field=column.field
                                            sort=sort_signal
                                            on_sort=on_sort
                                            min_width=column.min_width
                                            align=column.align
                                        />
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <TableHeaderCell resizable=true min_width=column.min_width class="resizable">
                                            {column.header}
                                        </TableHeaderCell>
                                    }
                                    .into_any()
                                }
                            }).collect_view()}
                            {has_row_actions.then(|| view! {
                                <TableHeaderCell min_width=80.0>"Actions"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{table_body}</TableBody>
                </Table>
            </div>
        }
    };

    let narrowed = Signal::derive(move || {
        table.with(|c| c.search().is_active() || !c.filters().is_empty())
    });
    let on_clear_filters = Callback::new(move |_| table.clear_query());
    let on_retry = Callback::new(move |_| table.refresh());

    view! {
        <div class="server-table">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="server-table__toolbar">
                <SearchInput
                    value=Signal::derive(move || table.with(|c| c.search().raw().to_string()))
                    active=Signal::derive(move || table.with(|c| c.search().is_active()))
                    on_input=Callback::new(move |raw| table.search_input(raw))
                    on_clear=Callback::new(move |_| table.clear_search())
                    placeholder=search_placeholder
                />
                <Space>
                    {children.map(|children| children())}
                    <ColumnToggle table=table columns=columns.get_value() />
                    <ExportMenu
                        formats=export_formats
                        on_export=on_export_page
                        disabled=Signal::derive(move || Some(table.with(|c| c.data().is_empty())))
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| table.refresh()
                        disabled=Signal::derive(move || table.with(|c| c.is_pending()))
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </Space>
            </Flex>

            <FilterPanel table=table filters=filters>
                <PaginationControls
                    current_page=Signal::derive(move || table.with(|c| c.current_page()))
                    has_prev=Signal::derive(move || table.with(|c| c.has_prev()))
                    has_next=Signal::derive(move || table.with(|c| c.has_next()))
                    pending=Signal::derive(move || table.with(|c| c.is_pending()))
                    total_count=Signal::derive(move || table.with(|c| c.pagination().total_count))
                    page_size=Signal::derive(move || table.with(|c| c.page_size()))
                    page_size_options=page_size_options
                    on_first=Callback::new(move |_| table.first_page())
                    on_prev=Callback::new(move |_| table.prev_page())
                    on_next=Callback::new(move |_| table.next_page())
                    on_page_size_change=Callback::new(move |size| table.set_page_size(size))
                />
            </FilterPanel>

            <BulkActionBar
                table=table
                actions=bulk_actions
                export_formats=export_formats
                on_export_selected=on_export_selected
            />

            <ErrorBanner message=export_error />
            <ErrorBanner message=reload_error on_retry=on_retry />

            {move || match table.with(|c| c.status()) {
                TableStatus::Loading => view! { <LoadingState /> }.into_any(),
                TableStatus::Failed => view! {
                    <ErrorState
                        message=Signal::derive(move || {
                            table.with(|c| c.error().unwrap_or("Failed to load data").to_string())
                        })
                        on_retry=on_retry
                    />
                }
                .into_any(),
                TableStatus::Empty => view! {
                    <EmptyState narrowed=narrowed on_clear_filters=on_clear_filters />
                }
                .into_any(),
                TableStatus::Rows => table_view().into_any(),
            }}
        </div>
    }
}
