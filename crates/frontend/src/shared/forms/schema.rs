//! Validation generated from field descriptors.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use super::field::{FieldConfig, FieldKind};
use super::value::{FormValue, FormValues};

/// Field name → first error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_insert(message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

pub fn validate(fields: &[FieldConfig], values: &FormValues) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();
    for field in fields.iter().filter(|f| f.is_visible(values)) {
        if let Err(message) = validate_field(field, values) {
            errors.insert(&field.name, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_field(field: &FieldConfig, values: &FormValues) -> Result<(), String> {
    let empty = field.kind.empty_value();
    let value = values.get(&field.name).unwrap_or(&empty);

    if let Some(validator) = field.validator {
        return validator(value, values);
    }

    if value.is_blank() {
        return if field.required {
            Err(format!("{} is required", field.label))
        } else {
            Ok(())
        };
    }

    let text = value.as_text();
    let text = text.trim();
    match &field.kind {
        FieldKind::Email if !is_email(text) => Err(format!("{} must be a valid email", field.label)),
        FieldKind::Number {
            min,
            max,
            dynamic_min,
            dynamic_max,
            ..
        } => {
            let number = text
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| format!("{} must be a number", field.label))?;
            let min = dynamic_min
                .as_deref()
                .and_then(|other| values.number(other))
                .or(*min);
            let max = dynamic_max
                .as_deref()
                .and_then(|other| values.number(other))
                .or(*max);
            if let Some(min) = min.filter(|min| number < *min) {
                return Err(format!("{} must be at least {}", field.label, min));
            }
            if let Some(max) = max.filter(|max| number > *max) {
                return Err(format!("{} must be at most {}", field.label, max));
            }
            Ok(())
        }
        FieldKind::Select { options } if !options.iter().any(|o| o.value == text) => {
            Err(format!("{} has an unknown value", field.label))
        }
        FieldKind::MultiSelect { options } if !options.is_empty() => match value {
            FormValue::List(items) if items.iter().all(|i| options.iter().any(|o| o.value == *i)) => Ok(()),
            _ => Err(format!("{} has an unknown value", field.label)),
        },
        FieldKind::Date if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err() => {
            Err(format!("{} must be a valid date", field.label))
        }
        FieldKind::DateTime if parse_datetime(text).is_none() => {
            Err(format!("{} must be a valid date and time", field.label))
        }
        _ => Ok(()),
    }
}

/// `datetime-local` values, with or without seconds
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn is_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::field::SelectOption;

    fn limit_fields() -> Vec<FieldConfig> {
        vec![
            FieldConfig::new("account_balance", "Balance", FieldKind::number()),
            FieldConfig::new(
                "spend_limit",
                "Spend limit",
                FieldKind::Number {
                    min: Some(0.0),
                    max: None,
                    step: None,
                    dynamic_min: None,
                    dynamic_max: Some("account_balance".into()),
                },
            ),
        ]
    }

    fn with(values: &[(&str, FormValue)], fields: &[FieldConfig]) -> FormValues {
        let mut form = FormValues::initial(fields);
        for (name, value) in values {
            form.set(name, value.clone());
        }
        form
    }

    fn text(s: &str) -> FormValue {
        FormValue::Text(s.to_string())
    }

    #[test]
    fn test_required_and_email() {
        let fields = vec![FieldConfig::new("email", "Email", FieldKind::Email).required()];

        let errors = validate(&fields, &FormValues::initial(&fields)).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));

        let values = with(&[("email", text("ops@broker"))], &fields);
        assert_eq!(
            validate(&fields, &values).unwrap_err().get("email"),
            Some("Email must be a valid email")
        );

        let values = with(&[("email", text("ops@broker.test"))], &fields);
        assert!(validate(&fields, &values).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a b@c.de"));
        assert!(!is_email("a@@b.co"));
    }

    #[test]
    fn test_number_coercion_and_dynamic_max() {
        let fields = limit_fields();
        let values = with(&[("account_balance", text("1000")), ("spend_limit", text("abc"))], &fields);
        assert_eq!(
            validate(&fields, &values).unwrap_err().get("spend_limit"),
            Some("Spend limit must be a number")
        );

        let values = with(&[("account_balance", text("1000")), ("spend_limit", text("1500"))], &fields);
        assert_eq!(
            validate(&fields, &values).unwrap_err().get("spend_limit"),
            Some("Spend limit must be at most 1000")
        );

        let values = with(&[("account_balance", text("2000")), ("spend_limit", text("1500"))], &fields);
        assert!(validate(&fields, &values).is_ok());

        let values = with(&[("spend_limit", text("-1"))], &fields);
        assert_eq!(
            validate(&fields, &values).unwrap_err().get("spend_limit"),
            Some("Spend limit must be at least 0")
        );
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let fields = vec![FieldConfig::new(
            "account_balance",
            "Account balance",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
                step: None,
                dynamic_min: None,
                dynamic_max: None,
            },
        )
        .required()];

        for raw in ["NaN", "inf", "-inf", "infinity"] {
            let values = with(&[("account_balance", text(raw))], &fields);
            assert_eq!(
                validate(&fields, &values).unwrap_err().get("account_balance"),
                Some("Account balance must be a number"),
                "{} should not validate",
                raw
            );
            assert_eq!(values.number("account_balance"), None);
        }

        let values = with(&[("account_balance", text("12.5"))], &fields);
        assert!(validate(&fields, &values).is_ok());
        assert_eq!(values.to_payload(&fields)["account_balance"], serde_json::json!(12.5));
    }

    #[test]
    fn test_hidden_fields_are_not_validated() {
        let fields = vec![
            FieldConfig::new(
                "role",
                "Role",
                FieldKind::select(vec![SelectOption::new("admin", "Admin"), SelectOption::new("trader", "Trader")]),
            )
            .required(),
            FieldConfig::new("desk", "Desk", FieldKind::Text)
                .required()
                .show_when("role", &["trader"]),
        ];

        let values = with(&[("role", text("admin"))], &fields);
        assert!(validate(&fields, &values).is_ok());

        let values = with(&[("role", text("trader"))], &fields);
        assert_eq!(validate(&fields, &values).unwrap_err().get("desk"), Some("Desk is required"));

        let values = with(&[("role", text("root"))], &fields);
        assert_eq!(
            validate(&fields, &values).unwrap_err().get("role"),
            Some("Role has an unknown value")
        );
    }

    #[test]
    fn test_custom_validator_replaces_generated_rule() {
        fn symbol(value: &FormValue, _: &FormValues) -> Result<(), String> {
            let s = value.as_text();
            if s.len() == 6 && s.chars().all(|c| c.is_ascii_uppercase()) {
                Ok(())
            } else {
                Err("Use a 6-letter symbol".to_string())
            }
        }

        let fields = vec![FieldConfig::new("symbol", "Symbol", FieldKind::Email)
            .required()
            .validate_with(symbol)];
        let values = with(&[("symbol", text("EURUSD"))], &fields);
        assert!(validate(&fields, &values).is_ok());

        let values = FormValues::initial(&fields);
        assert_eq!(
            validate(&fields, &values).unwrap_err().get("symbol"),
            Some("Use a 6-letter symbol")
        );
    }

    #[test]
    fn test_dates_and_checkbox() {
        let fields = vec![
            FieldConfig::new("day", "Day", FieldKind::Date),
            FieldConfig::new("at", "At", FieldKind::DateTime),
            FieldConfig::new("terms", "Terms", FieldKind::Checkbox).required(),
        ];
        let values = with(
            &[
                ("day", text("2025-02-30")),
                ("at", text("2025-02-01T10:15")),
                ("terms", FormValue::Bool(false)),
            ],
            &fields,
        );
        let errors = validate(&fields, &values).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("day"), Some("Day must be a valid date"));
        assert_eq!(errors.get("terms"), Some("Terms is required"));
        assert!(parse_datetime("2025-02-01T10:15:30").is_some());
    }
}
