use serde::Serialize;
use serde_json::Value;

use super::format::{plain_text, CellFormat};

/// Row type a server table can display.
///
/// Any serializable DTO qualifies: fields are looked up by their serialized
/// name, and `a.b` walks into nested objects.
pub trait TableRow: Clone + Send + Sync + 'static {
    fn field_value(&self, field: &str) -> Value;

    fn row_id(&self, id_field: &str) -> String {
        plain_text(&self.field_value(id_field))
    }
}

impl<T> TableRow for T
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    fn field_value(&self, field: &str) -> Value {
        let Ok(mut current) = serde_json::to_value(self) else {
            return Value::Null;
        };
        for segment in field.split('.') {
            current = match current {
                Value::Object(mut map) => map.remove(segment).unwrap_or(Value::Null),
                _ => return Value::Null,
            };
        }
        current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

impl Align {
    pub fn style(&self) -> &'static str {
        match self {
            Self::Left => "text-align: left;",
            Self::Right => "text-align: right;",
            Self::Center => "text-align: center;",
        }
    }
}

/// Column of a server table
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Stable id, used for sorting and the visibility map
    pub id: String,
    pub header: String,
    /// Field read from the row, defaults to `id`
    pub field: String,
    pub format: CellFormat,
    pub sortable: bool,
    /// Whether the column toggle may hide it
    pub hideable: bool,
    pub align: Align,
    pub min_width: f64,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            field: id.clone(),
            id,
            header: header.into(),
            format: CellFormat::Text,
            sortable: true,
            hideable: true,
            align: Align::Left,
            min_width: 100.0,
        }
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Numeric formats are right-aligned unless told otherwise
    pub fn format(mut self, format: CellFormat) -> Self {
        if format.is_numeric() {
            self.align = Align::Right;
        }
        self.format = format;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn value<T: TableRow>(&self, row: &T) -> Value {
        row.field_value(&self.field)
    }

    /// Formatted cell text, as displayed and exported
    pub fn cell_text<T: TableRow>(&self, row: &T) -> String {
        self.format.format(&self.value(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Serialize)]
    struct Row {
        id: u32,
        name: String,
        balance: f64,
        owner: Owner,
    }

    #[derive(Clone, Serialize)]
    struct Owner {
        email: String,
    }

    fn row() -> Row {
        Row {
            id: 7,
            name: "Acme".into(),
            balance: 1200.0,
            owner: Owner {
                email: "ops@acme.test".into(),
            },
        }
    }

    #[test]
    fn test_field_lookup() {
        let row = row();
        assert_eq!(row.field_value("name"), json!("Acme"));
        assert_eq!(row.field_value("owner.email"), json!("ops@acme.test"));
        assert_eq!(row.field_value("missing"), Value::Null);
        assert_eq!(row.field_value("name.nested"), Value::Null);
        assert_eq!(row.row_id("id"), "7");
    }

    #[test]
    fn test_cell_text_uses_formatter() {
        let column = ColumnDef::new("balance", "Balance").format(CellFormat::Currency { code: "USD" });
        assert_eq!(column.cell_text(&row()), "1 200.00 USD");
        assert_eq!(column.align, Align::Right);
    }

    #[test]
    fn test_field_override() {
        let column = ColumnDef::new("owner", "Owner").field("owner.email");
        assert_eq!(column.cell_text(&row()), "ops@acme.test");
    }
}
