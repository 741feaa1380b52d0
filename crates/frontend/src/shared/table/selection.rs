use std::collections::HashSet;

use super::column::TableRow;

/// How much of the loaded page is selected; drives the header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    None,
    Partial,
    All,
}

/// Selected row ids, kept across page changes.
///
/// Rows are resolved against the page currently loaded: ids selected on a page
/// that has been navigated away from stay in the set (and are counted by
/// [`SelectionSet::unresolved_count`]) but are not materialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    /// Flip membership of `id`; returns whether it is selected now
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Select or deselect every row of the loaded page
    pub fn set_page<T: TableRow>(&mut self, rows: &[T], id_field: &str, selected: bool) {
        for row in rows {
            self.set(&row.row_id(id_field), selected);
        }
    }

    pub fn page_state<T: TableRow>(&self, rows: &[T], id_field: &str) -> PageSelection {
        let selected = rows
            .iter()
            .filter(|row| self.contains(&row.row_id(id_field)))
            .count();
        match selected {
            0 => PageSelection::None,
            n if n == rows.len() => PageSelection::All,
            _ => PageSelection::Partial,
        }
    }

    /// Selected rows among `rows`, in page order
    pub fn materialize<T: TableRow>(&self, rows: &[T], id_field: &str) -> Vec<T> {
        rows.iter()
            .filter(|row| self.contains(&row.row_id(id_field)))
            .cloned()
            .collect()
    }

    /// Selected ids that do not belong to `rows`
    pub fn unresolved_count<T: TableRow>(&self, rows: &[T], id_field: &str) -> usize {
        let on_page: HashSet<String> = rows.iter().map(|row| row.row_id(id_field)).collect();
        self.ids.iter().filter(|id| !on_page.contains(*id)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows(ids: &[u32]) -> Vec<Value> {
        ids.iter().map(|id| json!({"id": id, "name": format!("row {}", id)})).collect()
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut selection = SelectionSet::default();
        selection.set("1", true);
        let before = selection.clone();

        assert!(selection.toggle("5"));
        assert!(!selection.toggle("5"));
        assert_eq!(selection, before);

        assert!(!selection.toggle("1"));
        assert!(selection.toggle("1"));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_page_state() {
        let page = rows(&[1, 2, 3]);
        let mut selection = SelectionSet::default();
        assert_eq!(selection.page_state(&page, "id"), PageSelection::None);
        selection.set("2", true);
        assert_eq!(selection.page_state(&page, "id"), PageSelection::Partial);
        selection.set_page(&page, "id", true);
        assert_eq!(selection.page_state(&page, "id"), PageSelection::All);
        selection.set_page(&page, "id", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_materialize_only_resolves_loaded_rows() {
        let page_one = rows(&[4, 5, 6]);
        let page_two = rows(&[7, 8, 9]);

        let mut selection = SelectionSet::default();
        selection.toggle("5");
        selection.toggle("8");

        let resolved = selection.materialize(&page_two, "id");
        assert_eq!(resolved, vec![json!({"id": 8, "name": "row 8"})]);
        assert_eq!(selection.unresolved_count(&page_two, "id"), 1);
        assert_eq!(selection.materialize(&page_one, "id").len(), 1);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_custom_id_field() {
        let page = vec![json!({"uuid": "a-1"}), json!({"uuid": "b-2"})];
        let mut selection = SelectionSet::default();
        selection.toggle("b-2");
        assert_eq!(selection.materialize(&page, "uuid"), vec![json!({"uuid": "b-2"})]);
    }
}
