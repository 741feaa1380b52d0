//! State machine of a server-driven table.
//!
//! The controller never performs I/O. Every user action that needs data
//! returns a [`FetchTicket`]; the caller runs the fetch and hands the result
//! back to [`TableController::complete`]. Only the latest ticket may change the
//! table, older ones are discarded as stale.

use std::fmt::Display;

use contracts::shared::table::{PaginationInfo, SortOrder, TableParams, TableResponse};

use super::column::TableRow;
use super::cursor::CursorHistory;
use super::filters::FilterSet;
use super::search::SearchState;
use super::selection::{PageSelection, SelectionSet};

#[derive(Debug, Clone, PartialEq)]
pub struct TableSettings {
    pub page_size: usize,
    pub row_id_field: String,
    /// Sent as `searchFields` together with a non-empty search
    pub search_fields: Vec<String>,
    pub default_sort: Option<(String, SortOrder)>,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            row_id_field: "id".to_string(),
            search_fields: Vec::new(),
            default_sort: None,
        }
    }
}

/// Change applied to the cursor history once the fetch succeeds
#[derive(Debug, Clone, PartialEq, Eq)]
enum HistoryOp {
    Keep,
    Push(String),
    Pop,
    Clear,
}

/// A fetch the caller must perform
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    pub params: TableParams,
    target_page: usize,
    history: HistoryOp,
}

impl FetchTicket {
    pub fn target_page(&self) -> usize {
        self.target_page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// Superseded by a newer request, or the table is gone
    Stale,
}

/// What the table body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    /// First load in flight
    Loading,
    /// Nothing was ever loaded and the last fetch failed
    Failed,
    /// The server returned no rows
    Empty,
    Rows,
}

#[derive(Debug, Clone)]
pub struct TableController<T> {
    settings: TableSettings,
    data: Vec<T>,
    pagination: PaginationInfo,
    current_page: usize,
    history: CursorHistory,
    search: SearchState,
    filters: FilterSet,
    sort: Option<(String, SortOrder)>,
    page_size: usize,
    selection: SelectionSet,
    pending: bool,
    error: Option<String>,
    loaded: bool,
    seq: u64,
    disposed: bool,
}

impl<T: TableRow> TableController<T> {
    /// `initial` is data rendered by the caller before the first fetch
    pub fn new(settings: TableSettings, initial: Option<TableResponse<T>>) -> Self {
        let loaded = initial.is_some();
        let initial = initial.unwrap_or_else(TableResponse::empty);
        Self {
            sort: settings.default_sort.clone(),
            page_size: settings.page_size.max(1),
            settings,
            data: initial.data,
            pagination: initial.pagination,
            current_page: 1,
            history: CursorHistory::default(),
            search: SearchState::default(),
            filters: FilterSet::default(),
            selection: SelectionSet::default(),
            pending: false,
            error: None,
            loaded,
            seq: 0,
            disposed: false,
        }
    }

    /// Fetch issued when the table appears; pre-seeded tables skip it
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.loaded {
            None
        } else {
            Some(self.perform_fetch(None, 1, HistoryOp::Keep))
        }
    }

    pub fn build_params(&self, cursor: Option<String>) -> TableParams {
        let search = self.search.query();
        let (search, search_fields) = if search.is_empty() {
            (None, Vec::new())
        } else {
            (Some(search.to_string()), self.settings.search_fields.clone())
        };
        TableParams {
            cursor,
            limit: self.page_size,
            sort_by: self.sort.as_ref().map(|(field, _)| field.clone()),
            sort_order: self.sort.as_ref().map(|(_, order)| *order),
            search,
            search_fields,
            filters: self.filters.to_vec(),
        }
    }

    fn perform_fetch(
        &mut self,
        cursor: Option<String>,
        target_page: usize,
        history: HistoryOp,
    ) -> FetchTicket {
        self.seq += 1;
        self.pending = true;
        let params = self.build_params(cursor);
        log::debug!(
            "fetch #{} page {} cursor {:?}",
            self.seq,
            target_page,
            params.cursor
        );
        FetchTicket {
            seq: self.seq,
            params,
            target_page,
            history,
        }
    }

    /// Query inputs changed: stale cursors must never be reused
    fn reset(&mut self) -> FetchTicket {
        self.history.clear();
        self.pagination = PaginationInfo::default();
        self.current_page = 1;
        self.perform_fetch(None, 1, HistoryOp::Clear)
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if self.pending {
            return None;
        }
        let cursor = self.pagination.next()?.to_string();
        let target = self.current_page + 1;
        Some(self.perform_fetch(Some(cursor.clone()), target, HistoryOp::Push(cursor)))
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        if self.pending {
            return None;
        }
        let cursor = self.history.previous()?;
        let target = self.current_page.saturating_sub(1).max(1);
        Some(self.perform_fetch(cursor, target, HistoryOp::Pop))
    }

    pub fn first_page(&mut self) -> Option<FetchTicket> {
        if self.pending || self.current_page == 1 {
            return None;
        }
        Some(self.perform_fetch(None, 1, HistoryOp::Clear))
    }

    /// Re-fetch the page on screen, also used as the retry action
    pub fn refresh(&mut self) -> FetchTicket {
        let cursor = self.history.top().map(str::to_string);
        self.perform_fetch(cursor, self.current_page, HistoryOp::Keep)
    }

    pub fn search_input(&mut self, raw: impl Into<String>) -> u64 {
        self.search.input(raw)
    }

    /// Debounce timer fired for `generation`
    pub fn settle_search(&mut self, generation: u64) -> Option<FetchTicket> {
        if self.search.settle(generation) {
            Some(self.reset())
        } else {
            None
        }
    }

    pub fn clear_search(&mut self) -> FetchTicket {
        self.search.clear();
        self.reset()
    }

    pub fn set_single_filter(&mut self, field: &str, value: &str) -> Option<FetchTicket> {
        let changed = self.filters.set_single(field, value);
        changed.then(|| self.reset())
    }

    pub fn toggle_multi_filter(&mut self, field: &str, value: &str, checked: bool) -> Option<FetchTicket> {
        let changed = self.filters.toggle_multi(field, value, checked);
        changed.then(|| self.reset())
    }

    pub fn remove_filter(&mut self, field: &str, value: Option<&str>) -> Option<FetchTicket> {
        let changed = self.filters.remove(field, value);
        changed.then(|| self.reset())
    }

    pub fn clear_all_filters(&mut self) -> Option<FetchTicket> {
        let changed = self.filters.clear_all();
        changed.then(|| self.reset())
    }

    /// Drop search text and every filter with a single fetch; nothing to
    /// clear means no fetch
    pub fn clear_query(&mut self) -> Option<FetchTicket> {
        let had_search = !self.search.raw().is_empty() || self.search.is_active();
        self.search.clear();
        let had_filters = self.filters.clear_all();
        (had_search || had_filters).then(|| self.reset())
    }

    /// A new column sorts ascending, the sorted column flips its order
    pub fn toggle_sort(&mut self, field: &str) -> FetchTicket {
        self.sort = match self.sort.take() {
            Some((current, order)) if current == field => Some((current, order.toggled())),
            _ => Some((field.to_string(), SortOrder::Asc)),
        };
        self.reset()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Option<FetchTicket> {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return None;
        }
        self.page_size = page_size;
        Some(self.reset())
    }

    /// Apply the result of `ticket`'s fetch
    pub fn complete<E: Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<TableResponse<T>, E>,
    ) -> FetchOutcome {
        if self.disposed || ticket.seq != self.seq {
            log::debug!("discarding stale response #{} (latest #{})", ticket.seq, self.seq);
            return FetchOutcome::Stale;
        }
        self.pending = false;

        match result {
            Ok(response) => {
                match ticket.history {
                    HistoryOp::Keep => {}
                    HistoryOp::Push(cursor) => self.history.push(cursor),
                    HistoryOp::Pop => {
                        self.history.pop();
                    }
                    HistoryOp::Clear => self.history.clear(),
                }
                self.data = response.data;
                self.pagination = response.pagination;
                self.current_page = ticket.target_page;
                self.error = None;
                self.loaded = true;
                FetchOutcome::Applied
            }
            Err(e) => {
                log::error!("Failed to load page {}: {}", ticket.target_page, e);
                self.error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// The table is gone; every response still in flight is dropped
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = false;
    }

    pub fn toggle_row(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn set_page_selected(&mut self, selected: bool) {
        self.selection
            .set_page(&self.data, &self.settings.row_id_field, selected);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, row: &T) -> bool {
        self.selection.contains(&self.row_id(row))
    }

    pub fn page_selection(&self) -> PageSelection {
        self.selection
            .page_state(&self.data, &self.settings.row_id_field)
    }

    /// Selected rows that are loaded, in page order
    pub fn selected_rows(&self) -> Vec<T> {
        self.selection
            .materialize(&self.data, &self.settings.row_id_field)
    }

    /// Selected ids belonging to pages no longer loaded
    pub fn unresolved_selection_count(&self) -> usize {
        self.selection
            .unresolved_count(&self.data, &self.settings.row_id_field)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn row_id(&self, row: &T) -> String {
        row.row_id(&self.settings.row_id_field)
    }

    pub fn status(&self) -> TableStatus {
        if !self.data.is_empty() {
            TableStatus::Rows
        } else if self.pending && !self.loaded {
            TableStatus::Loading
        } else if self.error.is_some() && !self.loaded {
            TableStatus::Failed
        } else if self.loaded {
            TableStatus::Empty
        } else {
            TableStatus::Loading
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.next().is_some()
    }

    pub fn has_prev(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn sort(&self) -> Option<(&str, SortOrder)> {
        self.sort
            .as_ref()
            .map(|(field, order)| (field.as_str(), *order))
    }

    pub fn row_id_field(&self) -> &str {
        &self.settings.row_id_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::TableFilter;
    use serde_json::{json, Value};

    fn settings(page_size: usize) -> TableSettings {
        TableSettings {
            page_size,
            search_fields: vec!["name".into(), "code".into()],
            ..TableSettings::default()
        }
    }

    fn page(ids: std::ops::Range<u32>, next: Option<&str>) -> TableResponse<Value> {
        TableResponse {
            data: ids.map(|id| json!({"id": id})).collect(),
            pagination: PaginationInfo {
                has_more: next.is_some(),
                next_cursor: next.map(str::to_string),
                total_count: None,
            },
        }
    }

    fn ok(response: TableResponse<Value>) -> Result<TableResponse<Value>, String> {
        Ok(response)
    }

    fn loaded_first_page() -> TableController<Value> {
        TableController::new(settings(10), Some(page(0..10, Some("c1"))))
    }

    #[test]
    fn test_preseeded_mount_does_not_fetch() {
        let mut table = loaded_first_page();
        assert!(table.mount().is_none());

        let mut empty: TableController<Value> = TableController::new(settings(10), None);
        let ticket = empty.mount().unwrap();
        assert_eq!(ticket.params, TableParams::first_page(10));
        assert_eq!(empty.status(), TableStatus::Loading);
    }

    #[test]
    fn test_next_then_prev_returns_to_first_page() {
        let mut table = loaded_first_page();

        let next = table.next_page().unwrap();
        assert_eq!(next.params.cursor.as_deref(), Some("c1"));
        assert!(table.is_pending());
        assert_eq!(table.complete(next, ok(page(10..20, None))), FetchOutcome::Applied);
        assert_eq!(table.history_len(), 1);
        assert_eq!(table.current_page(), 2);
        assert!(!table.has_next());

        let prev = table.prev_page().unwrap();
        assert_eq!(prev.params.cursor, None);
        assert_eq!(table.complete(prev, ok(page(0..10, Some("c1")))), FetchOutcome::Applied);
        assert_eq!(table.history_len(), 0);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.data()[0], json!({"id": 0}));
        assert!(table.prev_page().is_none());
    }

    #[test]
    fn test_pagination_no_ops() {
        let mut table: TableController<Value> =
            TableController::new(settings(10), Some(page(0..3, None)));
        assert!(table.next_page().is_none());
        assert!(table.prev_page().is_none());
        assert!(table.first_page().is_none());
        assert!(!table.is_pending());
    }

    #[test]
    fn test_first_page_clears_history() {
        let mut table = loaded_first_page();
        let t = table.next_page().unwrap();
        table.complete(t, ok(page(10..20, Some("c2"))));
        let t = table.next_page().unwrap();
        assert_eq!(t.params.cursor.as_deref(), Some("c2"));
        table.complete(t, ok(page(20..30, Some("c3"))));
        assert_eq!(table.history_len(), 2);
        assert_eq!(table.current_page(), 3);

        let prev = table.prev_page().unwrap();
        assert_eq!(prev.params.cursor.as_deref(), Some("c1"));
        assert_eq!(prev.target_page(), 2);
        table.complete(prev, ok(page(10..20, Some("c2"))));

        let first = table.first_page().unwrap();
        assert_eq!(first.params.cursor, None);
        table.complete(first, ok(page(0..10, Some("c1"))));
        assert_eq!(table.history_len(), 0);
        assert_eq!(table.current_page(), 1);
    }

    #[test]
    fn test_history_counts_only_successful_moves() {
        let mut table = loaded_first_page();
        let next = table.next_page().unwrap();
        assert_eq!(table.complete(next, Err("offline")), FetchOutcome::Failed);
        assert_eq!(table.history_len(), 0);
        assert_eq!(table.current_page(), 1);
        assert_eq!(table.error(), Some("offline"));
        assert_eq!(table.data().len(), 10);
        assert!(!table.is_pending());

        let next = table.next_page().unwrap();
        table.complete(next, ok(page(10..20, Some("c2"))));
        assert_eq!(table.history_len(), 1);
        assert_eq!(table.error(), None);
    }

    #[test]
    fn test_query_changes_reset_pagination() {
        let mut table = loaded_first_page();
        let next = table.next_page().unwrap();
        table.complete(next, ok(page(10..20, Some("c2"))));

        let sort = table.toggle_sort("name");
        assert_eq!(table.history_len(), 0);
        assert_eq!(sort.params.cursor, None);
        assert_eq!(sort.params.sort_by.as_deref(), Some("name"));
        assert_eq!(sort.params.sort_order, Some(SortOrder::Asc));
        assert!(!table.has_next());
        table.complete(sort, ok(page(0..10, Some("n1"))));

        let flipped = table.toggle_sort("name");
        assert_eq!(flipped.params.sort_order, Some(SortOrder::Desc));
        table.complete(flipped, ok(page(0..10, None)));

        let other = table.toggle_sort("code");
        assert_eq!(other.params.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_debounced_search_issues_one_fetch() {
        let mut table = loaded_first_page();
        let first = table.search_input("ab");
        let second = table.search_input("abc");

        assert!(table.settle_search(first).is_none());
        let ticket = table.settle_search(second).unwrap();
        assert_eq!(ticket.params.search.as_deref(), Some("abc"));
        assert_eq!(ticket.params.search_fields, vec!["name", "code"]);
        assert_eq!(ticket.params.cursor, None);
        assert!(table.settle_search(second).is_none());
    }

    #[test]
    fn test_clear_search_always_refetches() {
        let mut table = loaded_first_page();
        let ticket = table.clear_search();
        assert_eq!(ticket.params.search, None);
        assert!(ticket.params.search_fields.is_empty());
    }

    #[test]
    fn test_clear_query_issues_one_fetch() {
        let mut table = loaded_first_page();
        assert!(table.clear_query().is_none());

        let t = table.set_single_filter("status", "active").unwrap();
        table.complete(t, ok(page(0..10, None)));
        let generation = table.search_input("acme");
        let t = table.settle_search(generation).unwrap();
        table.complete(t, ok(page(0..10, None)));

        let ticket = table.clear_query().unwrap();
        assert_eq!(ticket.params.search, None);
        assert!(ticket.params.filters.is_empty());
        assert_eq!(ticket.params.cursor, None);
        assert!(table.filters().is_empty());
        assert!(!table.search().is_active());
        assert!(table.clear_query().is_none());
    }

    #[test]
    fn test_reselecting_current_filter_keeps_history() {
        let mut table = loaded_first_page();
        let t = table.set_single_filter("status", "active").unwrap();
        table.complete(t, ok(page(0..10, Some("c1"))));
        let t = table.toggle_multi_filter("currency", "USD", true).unwrap();
        table.complete(t, ok(page(0..10, Some("c1"))));
        let next = table.next_page().unwrap();
        table.complete(next, ok(page(10..20, None)));

        assert!(table.set_single_filter("status", "active").is_none());
        assert_eq!(table.history_len(), 1);
        assert_eq!(table.current_page(), 2);
    }

    #[test]
    fn test_multi_filter_request() {
        let mut table = loaded_first_page();
        let t = table.set_single_filter("status", "active").unwrap();
        table.complete(t, ok(page(0..10, None)));
        let t = table.toggle_multi_filter("status", "pending", true).unwrap();

        assert_eq!(
            t.params.filters,
            vec![
                TableFilter::equals("status", "active"),
                TableFilter::equals("status", "pending"),
            ]
        );
        assert!(table.toggle_multi_filter("status", "pending", true).is_none());
        assert!(table.toggle_multi_filter("status", "all", true).is_none());
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut table = loaded_first_page();
        assert!(table.set_page_size(10).is_none());
        let t = table.set_page_size(50).unwrap();
        assert_eq!(t.params.limit, 50);
        assert_eq!(table.page_size(), 50);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut table = loaded_first_page();
        let slow = table.set_single_filter("status", "active").unwrap();
        let fast = table.set_single_filter("status", "pending").unwrap();

        assert_eq!(table.complete(fast, ok(page(50..52, None))), FetchOutcome::Applied);
        assert_eq!(table.complete(slow, ok(page(0..10, Some("x")))), FetchOutcome::Stale);
        assert_eq!(table.data().len(), 2);
        assert!(!table.has_next());
    }

    #[test]
    fn test_no_update_after_dispose() {
        let mut table = loaded_first_page();
        let ticket = table.refresh();
        table.dispose();
        assert_eq!(table.complete(ticket, ok(page(0..1, None))), FetchOutcome::Stale);
        assert_eq!(table.data().len(), 10);
    }

    #[test]
    fn test_refresh_keeps_cursor_and_page() {
        let mut table = loaded_first_page();
        let next = table.next_page().unwrap();
        table.complete(next, ok(page(10..20, Some("c2"))));

        let refresh = table.refresh();
        assert_eq!(refresh.params.cursor.as_deref(), Some("c1"));
        assert_eq!(refresh.target_page(), 2);
        table.complete(refresh, ok(page(10..20, Some("c2"))));
        assert_eq!(table.history_len(), 1);
    }

    #[test]
    fn test_selection_survives_paging() {
        let mut table: TableController<Value> =
            TableController::new(settings(3), Some(page(4..7, Some("c1"))));
        table.toggle_row("5");
        assert_eq!(table.page_selection(), PageSelection::Partial);

        let next = table.next_page().unwrap();
        table.complete(next, ok(page(7..10, None)));

        assert!(table.selected_rows().is_empty());
        assert_eq!(table.unresolved_selection_count(), 1);
        assert_eq!(table.selection_len(), 1);

        table.set_page_selected(true);
        assert_eq!(table.selected_rows().len(), 3);
        assert_eq!(table.page_selection(), PageSelection::All);
        table.clear_selection();
        assert_eq!(table.selection_len(), 0);
    }

    #[test]
    fn test_empty_and_failed_states() {
        let mut table: TableController<Value> = TableController::new(settings(10), None);
        let t = table.mount().unwrap();
        table.complete(t, Err("boom"));
        assert_eq!(table.status(), TableStatus::Failed);

        let t = table.refresh();
        table.complete(t, ok(page(0..0, None)));
        assert_eq!(table.status(), TableStatus::Empty);
    }
}
