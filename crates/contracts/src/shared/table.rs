//! Request/response types of the paginated collection endpoints.
//!
//! Every list endpoint of the API accepts [`TableParams`] as a query string and
//! answers with a [`TableResponse`]. Pagination is cursor based: the server hands
//! out an opaque `nextCursor` and the client sends it back to get the next page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    #[default]
    Equals,
}

/// One `field == value` condition.
///
/// Several filters on the same field are OR-ed by the server, filters on
/// different fields are AND-ed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFilter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

impl TableFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Equals,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<TableFilter>,
}

impl TableParams {
    /// Unsorted, unfiltered first page
    pub fn first_page(limit: usize) -> Self {
        Self {
            cursor: None,
            limit,
            sort_by: None,
            sort_order: None,
            search: None,
            search_fields: Vec::new(),
            filters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl PaginationInfo {
    /// Cursor of the following page, only when the server says there is one
    pub fn next(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: PaginationInfo,
}

impl<T> TableResponse<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            pagination: PaginationInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_serialize_camel_case_and_skip_empty() {
        let mut params = TableParams::first_page(10);
        params.sort_by = Some("created_at".into());
        params.sort_order = Some(SortOrder::Desc);
        params.filters.push(TableFilter::equals("status", "active"));

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "limit": 10,
                "sortBy": "created_at",
                "sortOrder": "desc",
                "filters": [{"field": "status", "operator": "equals", "value": "active"}]
            })
        );
    }

    #[test]
    fn test_response_without_pagination_block() {
        let response: TableResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data":[{"id":1}]}"#).unwrap();
        assert_eq!(response.data.len(), 1);
        assert!(!response.pagination.has_more);
        assert_eq!(response.pagination.next(), None);
    }

    #[test]
    fn test_next_cursor_requires_has_more() {
        let pagination: PaginationInfo =
            serde_json::from_str(r#"{"hasMore":false,"nextCursor":"c9","totalCount":42}"#).unwrap();
        assert_eq!(pagination.next(), None);
        assert_eq!(pagination.total_count, Some(42));

        let pagination = PaginationInfo {
            has_more: true,
            next_cursor: Some("c1".into()),
            total_count: None,
        };
        assert_eq!(pagination.next(), Some("c1"));
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled().as_str(), "asc");
    }
}
