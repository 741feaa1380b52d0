use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::field::{FieldConfig, FieldKind};
use crate::shared::table::format::plain_text;

/// Live value of one input
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl FormValue {
    /// Textual form used by conditions and validation
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(","),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(b) => !b,
            Self::List(items) => items.is_empty(),
        }
    }
}

/// Field name → value for a whole form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    values: BTreeMap<String, FormValue>,
}

impl FormValues {
    /// Defaults of every field
    pub fn initial(fields: &[FieldConfig]) -> Self {
        Self {
            values: fields
                .iter()
                .map(|f| (f.name.clone(), f.initial_value()))
                .collect(),
        }
    }

    /// Values of an existing record, for edit forms
    pub fn from_record(fields: &[FieldConfig], record: &Value) -> Self {
        let mut values = Self::initial(fields);
        for field in fields {
            match record.get(&field.name) {
                None | Some(Value::Null) => {}
                Some(raw) => values.set(&field.name, record_value(&field.kind, raw)),
            }
        }
        values
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: FormValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn text(&self, name: &str) -> String {
        self.get(name).map(FormValue::as_text).unwrap_or_default()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.text(name)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }

    /// Typed JSON payload of the visible fields
    pub fn to_payload(&self, fields: &[FieldConfig]) -> Value {
        let mut payload = Map::new();
        for field in fields.iter().filter(|f| f.is_visible(self)) {
            let value = self.get(&field.name).cloned().unwrap_or_else(|| field.kind.empty_value());
            if matches!(field.kind, FieldKind::Password) && value.is_blank() {
                continue;
            }
            payload.insert(field.name.clone(), payload_value(&field.kind, &value));
        }
        Value::Object(payload)
    }
}

fn record_value(kind: &FieldKind, raw: &Value) -> FormValue {
    match kind {
        FieldKind::Checkbox => FormValue::Bool(raw.as_bool().unwrap_or(false)),
        FieldKind::MultiSelect { .. } => FormValue::List(match raw {
            Value::Array(items) => items.iter().map(plain_text).collect(),
            other => vec![plain_text(other)],
        }),
        FieldKind::Date => FormValue::Text(plain_text(raw).chars().take(10).collect()),
        // datetime-local inputs take minutes precision
        FieldKind::DateTime => FormValue::Text(plain_text(raw).chars().take(16).collect()),
        _ => FormValue::Text(plain_text(raw)),
    }
}

fn payload_value(kind: &FieldKind, value: &FormValue) -> Value {
    match (kind, value) {
        (_, FormValue::Bool(b)) => Value::Bool(*b),
        (_, FormValue::List(items)) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        (_, FormValue::Text(s)) if s.trim().is_empty() => Value::Null,
        (FieldKind::Number { .. }, FormValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        (_, FormValue::Text(s)) => Value::String(s.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> Vec<FieldConfig> {
        vec![
            FieldConfig::new("name", "Name", FieldKind::Text).required(),
            FieldConfig::new("balance", "Balance", FieldKind::number()),
            FieldConfig::new("is_active", "Active", FieldKind::Checkbox),
            FieldConfig::new("expires_at", "Expires", FieldKind::DateTime),
            FieldConfig::new("password", "Password", FieldKind::Password),
            FieldConfig::new("tags", "Tags", FieldKind::multi_select(Vec::new())),
        ]
    }

    #[test]
    fn test_initial_values() {
        let values = FormValues::initial(&fields());
        assert_eq!(values.get("is_active"), Some(&FormValue::Bool(false)));
        assert_eq!(values.get("tags"), Some(&FormValue::List(Vec::new())));
        assert_eq!(values.text("name"), "");
    }

    #[test]
    fn test_from_record() {
        let record = json!({
            "name": "Acme",
            "balance": 1500.5,
            "is_active": true,
            "expires_at": "2025-06-01T12:30:00Z",
            "tags": ["fx", "cfd"],
        });
        let values = FormValues::from_record(&fields(), &record);
        assert_eq!(values.text("balance"), "1500.5");
        assert_eq!(values.number("balance"), Some(1500.5));
        assert_eq!(values.text("expires_at"), "2025-06-01T12:30");
        assert_eq!(values.get("is_active"), Some(&FormValue::Bool(true)));
        assert_eq!(values.text("tags"), "fx,cfd");
    }

    #[test]
    fn test_payload_is_typed() {
        let mut values = FormValues::initial(&fields());
        values.set("name", FormValue::Text("  Acme ".into()));
        values.set("balance", FormValue::Text("250".into()));

        assert_eq!(
            values.to_payload(&fields()),
            json!({
                "name": "Acme",
                "balance": 250.0,
                "is_active": false,
                "expires_at": null,
                "tags": [],
            })
        );
    }
}
