use contracts::shared::table::TableFilter;

/// Select value meaning "no filter on this field"
pub const ALL_VALUE: &str = "all";

fn is_no_filter(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL_VALUE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// One value at a time, with an "All" entry
    Single,
    /// Any number of values, OR-ed by the server
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Filter control offered in the table toolbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDef {
    pub field: String,
    pub label: String,
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

impl FilterDef {
    pub fn single(field: impl Into<String>, label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            kind: FilterKind::Single,
            options,
        }
    }

    pub fn multi(field: impl Into<String>, label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            kind: FilterKind::Multi,
            options,
        }
    }

    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

/// Removable chip summarizing the active filters of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    pub field: String,
    pub field_label: String,
    /// Selected label, or "N selected"
    pub text: String,
}

/// Active filters of a table.
///
/// Never holds an entry whose value is empty or [`ALL_VALUE`]: those mean
/// "no filter" and are represented by the absence of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<TableFilter>,
}

impl FilterSet {
    /// Replace the filter on `field`; "all" or empty removes it.
    /// Returns `true` when the set changed.
    /// The field keeps its place in the set, so badges do not reorder.
    pub fn set_single(&mut self, field: &str, value: &str) -> bool {
        if is_no_filter(value) {
            return self.remove(field, None);
        }
        let value = value.trim();
        if self.values_for(field) == [value] {
            return false;
        }
        match self.filters.iter().position(|f| f.field == field) {
            Some(index) => {
                self.filters[index] = TableFilter::equals(field, value);
                let mut seen = 0;
                self.filters.retain(|f| {
                    if f.field != field {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.filters.push(TableFilter::equals(field, value)),
        }
        true
    }

    /// Add or remove one value of a multi-select filter
    pub fn toggle_multi(&mut self, field: &str, value: &str, checked: bool) -> bool {
        if is_no_filter(value) {
            return false;
        }
        let value = value.trim();
        let present = self.is_active(field, value);
        match (checked, present) {
            (true, false) => {
                self.filters.push(TableFilter::equals(field, value));
                true
            }
            (false, true) => {
                self.filters.retain(|f| !(f.field == field && f.value == value));
                true
            }
            _ => false,
        }
    }

    /// Remove one value of `field`, or every value when `value` is `None`
    pub fn remove(&mut self, field: &str, value: Option<&str>) -> bool {
        let len = self.filters.len();
        match value {
            Some(value) => self.filters.retain(|f| !(f.field == field && f.value == value)),
            None => self.filters.retain(|f| f.field != field),
        }
        self.filters.len() != len
    }

    pub fn clear_all(&mut self) -> bool {
        let changed = !self.filters.is_empty();
        self.filters.clear();
        changed
    }

    pub fn is_active(&self, field: &str, value: &str) -> bool {
        self.filters.iter().any(|f| f.field == field && f.value == value)
    }

    pub fn values_for(&self, field: &str) -> Vec<&str> {
        self.filters
            .iter()
            .filter(|f| f.field == field)
            .map(|f| f.value.as_str())
            .collect()
    }

    /// Value of a single-select filter, [`ALL_VALUE`] when unset
    pub fn single_value(&self, field: &str) -> String {
        self.values_for(field)
            .first()
            .map(|v| v.to_string())
            .unwrap_or_else(|| ALL_VALUE.to_string())
    }

    pub fn as_slice(&self) -> &[TableFilter] {
        &self.filters
    }

    pub fn to_vec(&self) -> Vec<TableFilter> {
        self.filters.clone()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// One badge per filtered field, in order of first activation
    pub fn badges(&self, defs: &[FilterDef]) -> Vec<FilterBadge> {
        let mut fields: Vec<&str> = Vec::new();
        for f in &self.filters {
            if !fields.contains(&f.field.as_str()) {
                fields.push(&f.field);
            }
        }

        fields
            .into_iter()
            .map(|field| {
                let values = self.values_for(field);
                let def = defs.iter().find(|d| d.field == field);
                let field_label = def.map(|d| d.label.clone()).unwrap_or_else(|| field.to_string());
                let text = match (values.as_slice(), def) {
                    ([single], Some(def)) => def.option_label(single).to_string(),
                    ([single], None) => single.to_string(),
                    (many, _) => format!("{} selected", many.len()),
                };
                FilterBadge {
                    field: field.to_string(),
                    field_label,
                    text,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_def() -> FilterDef {
        FilterDef::multi(
            "status",
            "Status",
            vec![
                FilterOption::new("active", "Active"),
                FilterOption::new("pending", "Pending"),
            ],
        )
    }

    fn assert_no_placeholder_values(set: &FilterSet) {
        assert!(set
            .as_slice()
            .iter()
            .all(|f| !f.value.is_empty() && f.value != ALL_VALUE));
    }

    #[test]
    fn test_single_filter_replaces_and_removes() {
        let mut set = FilterSet::default();
        assert!(set.set_single("country", "DE"));
        assert!(set.set_single("country", "FR"));
        assert_eq!(set.values_for("country"), vec!["FR"]);
        assert!(!set.set_single("country", "FR"));

        assert!(set.set_single("country", ALL_VALUE));
        assert!(set.is_empty());
        assert!(!set.set_single("country", ""));
        assert_eq!(set.single_value("country"), ALL_VALUE);
    }

    #[test]
    fn test_reselecting_a_value_keeps_the_set() {
        let mut set = FilterSet::default();
        set.set_single("status", "active");
        set.toggle_multi("currency", "USD", true);

        assert!(!set.set_single("status", "active"));
        assert_eq!(
            set.to_vec(),
            vec![
                TableFilter::equals("status", "active"),
                TableFilter::equals("currency", "USD"),
            ]
        );

        assert!(set.set_single("status", "blocked"));
        assert_eq!(set.as_slice()[0], TableFilter::equals("status", "blocked"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_multi_filter_accumulates_in_order() {
        let mut set = FilterSet::default();
        assert!(set.toggle_multi("status", "active", true));
        assert!(set.toggle_multi("status", "pending", true));
        assert!(!set.toggle_multi("status", "pending", true));

        assert_eq!(
            set.to_vec(),
            vec![
                TableFilter::equals("status", "active"),
                TableFilter::equals("status", "pending"),
            ]
        );

        assert!(set.toggle_multi("status", "active", false));
        assert_eq!(set.values_for("status"), vec!["pending"]);
    }

    #[test]
    fn test_placeholder_values_never_stored() {
        let mut set = FilterSet::default();
        set.toggle_multi("status", ALL_VALUE, true);
        set.toggle_multi("status", "", true);
        set.toggle_multi("status", "  ", true);
        set.set_single("side", " all ");
        set.toggle_multi("status", "active", true);
        set.set_single("side", "buy");
        set.toggle_multi("status", "active", false);
        set.set_single("side", "");
        assert_no_placeholder_values(&set);
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_one_value_or_field() {
        let mut set = FilterSet::default();
        set.toggle_multi("status", "active", true);
        set.toggle_multi("status", "pending", true);
        set.set_single("side", "buy");

        assert!(set.remove("status", Some("active")));
        assert!(!set.remove("status", Some("active")));
        assert!(set.remove("status", None));
        assert_eq!(set.len(), 1);
        assert!(set.clear_all());
        assert!(!set.clear_all());
    }

    #[test]
    fn test_badges_grouped_by_field() {
        let mut set = FilterSet::default();
        set.toggle_multi("status", "active", true);
        set.set_single("side", "buy");
        set.toggle_multi("status", "pending", true);

        let badges = set.badges(&[status_def()]);
        assert_eq!(
            badges,
            vec![
                FilterBadge {
                    field: "status".into(),
                    field_label: "Status".into(),
                    text: "2 selected".into(),
                },
                FilterBadge {
                    field: "side".into(),
                    field_label: "side".into(),
                    text: "buy".into(),
                },
            ]
        );

        set.toggle_multi("status", "pending", false);
        assert_eq!(set.badges(&[status_def()])[0].text, "Active");
    }
}
