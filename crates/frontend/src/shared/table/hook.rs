//! Reactive wrapper around [`TableController`].
//!
//! `use_table_state` owns one controller per table and runs the fetches its
//! actions ask for. The handle is `Copy` so it can be moved into any number of
//! event handlers.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use contracts::shared::table::{TableParams, TableResponse};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::column::TableRow;
use super::controller::{FetchTicket, TableController, TableSettings};
use super::selection::PageSelection;
use super::visibility::{ColumnVisibility, LocalStorageStore};
use crate::shared::api::ApiError;

pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<TableResponse<T>, ApiError>>>>;
pub type FetchFn<T> = Rc<dyn Fn(TableParams) -> FetchFuture<T>>;

pub struct TableHandle<T: TableRow> {
    state: RwSignal<TableController<T>>,
    fetch: StoredValue<FetchFn<T>, LocalStorage>,
    visibility: RwSignal<ColumnVisibility>,
    table_key: StoredValue<String>,
    debounce_ms: u32,
}

impl<T: TableRow> Clone for TableHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: TableRow> Copy for TableHandle<T> {}

/// Create the table state and issue the mount fetch
pub fn use_table_state<T, F, Fut>(
    table_key: &str,
    settings: TableSettings,
    initial: Option<TableResponse<T>>,
    debounce_ms: u32,
    fetch: F,
) -> TableHandle<T>
where
    T: TableRow,
    F: Fn(TableParams) -> Fut + 'static,
    Fut: Future<Output = Result<TableResponse<T>, ApiError>> + 'static,
{
    let fetch: FetchFn<T> = Rc::new(move |params| Box::pin(fetch(params)) as FetchFuture<T>);
    let handle = TableHandle {
        state: RwSignal::new(TableController::new(settings, initial)),
        fetch: StoredValue::new_local(fetch),
        visibility: RwSignal::new(ColumnVisibility::load(&LocalStorageStore, table_key)),
        table_key: StoredValue::new(table_key.to_string()),
        debounce_ms,
    };

    let state = handle.state;
    on_cleanup(move || {
        state.try_update_untracked(|c| c.dispose());
    });

    handle.run(handle.state.try_update(|c| c.mount()).flatten());
    handle
}

impl<T: TableRow> TableHandle<T> {
    fn run(self, ticket: Option<FetchTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let Some(fetch) = self.fetch.try_get_value() else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = fetch(ticket.params.clone()).await;
            if state.try_update(|c| c.complete(ticket, result)).is_none() {
                log::debug!("table {} unmounted before its fetch resolved", self.key());
            }
        });
    }

    fn act(self, action: impl FnOnce(&mut TableController<T>) -> Option<FetchTicket>) {
        self.run(self.state.try_update(action).flatten());
    }

    fn key(self) -> String {
        self.table_key.try_get_value().unwrap_or_default()
    }

    /// Tracked read of the controller
    pub fn with<R>(self, f: impl FnOnce(&TableController<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(self, f: impl FnOnce(&TableController<T>) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn next_page(self) {
        self.act(|c| c.next_page());
    }

    pub fn prev_page(self) {
        self.act(|c| c.prev_page());
    }

    pub fn first_page(self) {
        self.act(|c| c.first_page());
    }

    pub fn refresh(self) {
        self.act(|c| Some(c.refresh()));
    }

    /// Keystroke in the search box; the query is committed after the quiet period
    pub fn search_input(self, raw: String) {
        let Some(generation) = self.state.try_update(|c| c.search_input(raw)) else {
            return;
        };
        let delay = self.debounce_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            self.act(|c| c.settle_search(generation));
        });
    }

    pub fn clear_search(self) {
        self.act(|c| Some(c.clear_search()));
    }

    pub fn clear_query(self) {
        self.act(|c| c.clear_query());
    }

    pub fn set_single_filter(self, field: String, value: String) {
        self.act(|c| c.set_single_filter(&field, &value));
    }

    pub fn toggle_multi_filter(self, field: String, value: String, checked: bool) {
        self.act(|c| c.toggle_multi_filter(&field, &value, checked));
    }

    pub fn remove_filter(self, field: String, value: Option<String>) {
        self.act(|c| c.remove_filter(&field, value.as_deref()));
    }

    pub fn clear_all_filters(self) {
        self.act(|c| c.clear_all_filters());
    }

    pub fn toggle_sort(self, field: String) {
        self.act(|c| Some(c.toggle_sort(&field)));
    }

    pub fn set_page_size(self, page_size: usize) {
        self.act(|c| c.set_page_size(page_size));
    }

    pub fn toggle_row(self, id: String) {
        self.state.update(|c| {
            c.toggle_row(&id);
        });
    }

    pub fn set_page_selected(self, selected: bool) {
        self.state.update(|c| c.set_page_selected(selected));
    }

    pub fn clear_selection(self) {
        self.state.update(|c| c.clear_selection());
    }

    pub fn page_selection(self) -> PageSelection {
        self.state.with(|c| c.page_selection())
    }

    /// Loaded rows the user selected, for exports and bulk actions
    pub fn selected_rows(self) -> Vec<T> {
        self.state.with_untracked(|c| c.selected_rows())
    }

    pub fn is_column_visible(self, column_id: &str) -> bool {
        self.visibility.with(|v| v.is_visible(column_id))
    }

    pub fn hidden_column_count(self) -> usize {
        self.visibility.with(|v| v.hidden_count())
    }

    /// Show or hide a column and persist the map
    pub fn toggle_column(self, column_id: String) {
        let key = self.key();
        self.visibility.update(|v| {
            v.toggle(&column_id);
            v.save(&LocalStorageStore, &key);
        });
    }
}
