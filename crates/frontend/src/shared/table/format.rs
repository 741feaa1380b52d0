//! Cell formatters shared by every table, keyed by semantic type.
//!
//! A column picks a [`CellFormat`]; the same formatter feeds the rendered cell
//! and every export format, so what is printed is what is on screen.

use serde_json::Value;

/// Visual variant of a badge, maps to the `badge--*` CSS classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Neutral => "badge badge--neutral",
            Self::Primary => "badge badge--primary",
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Error => "badge badge--error",
        }
    }
}

/// Label and colour of one enum value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub value: &'static str,
    pub label: &'static str,
    pub variant: BadgeVariant,
}

impl BadgeStyle {
    pub const fn new(value: &'static str, label: &'static str, variant: BadgeVariant) -> Self {
        Self {
            value,
            label,
            variant,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CellFormat {
    /// Raw value, stringified
    Text,
    Number { decimals: u8 },
    /// Two decimals, thousands separator, currency code suffix
    Currency { code: &'static str },
    Percent { decimals: u8 },
    Date,
    DateTime,
    Boolean {
        yes: &'static str,
        no: &'static str,
    },
    Badge(&'static [BadgeStyle]),
    Custom(fn(&Value) -> String),
}

impl Default for CellFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl CellFormat {
    pub const YES_NO: CellFormat = CellFormat::Boolean { yes: "Yes", no: "No" };

    pub fn format(&self, value: &Value) -> String {
        if value.is_null() {
            return String::new();
        }
        match self {
            Self::Text => plain_text(value),
            Self::Number { decimals } => as_f64(value)
                .map(|v| format_number_with_decimals(v, *decimals))
                .unwrap_or_else(|| plain_text(value)),
            Self::Currency { code } => as_f64(value)
                .map(|v| format!("{} {}", format_money(v), code))
                .unwrap_or_else(|| plain_text(value)),
            Self::Percent { decimals } => as_f64(value)
                .map(|v| format!("{:.*}%", usize::from(*decimals), v))
                .unwrap_or_else(|| plain_text(value)),
            Self::Date => format_date(&plain_text(value)),
            Self::DateTime => format_datetime(&plain_text(value)),
            Self::Boolean { yes, no } => match value {
                Value::Bool(true) => yes.to_string(),
                Value::Bool(false) => no.to_string(),
                other => plain_text(other),
            },
            Self::Badge(styles) => {
                let raw = plain_text(value);
                styles
                    .iter()
                    .find(|s| s.value == raw)
                    .map(|s| s.label.to_string())
                    .unwrap_or(raw)
            }
            Self::Custom(f) => f(value),
        }
    }

    /// Badge colour for enum-like values; `None` renders plain text
    pub fn badge_variant(&self, value: &Value) -> Option<BadgeVariant> {
        match self {
            Self::Badge(styles) => {
                let raw = plain_text(value);
                Some(
                    styles
                        .iter()
                        .find(|s| s.value == raw)
                        .map(|s| s.variant)
                        .unwrap_or(BadgeVariant::Neutral),
                )
            }
            Self::Boolean { .. } => match value {
                Value::Bool(true) => Some(BadgeVariant::Success),
                Value::Bool(false) => Some(BadgeVariant::Neutral),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number { .. } | Self::Currency { .. } | Self::Percent { .. }
        )
    }
}

/// Stringify a JSON value the way a user expects to read it
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(plain_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Number with a space as thousands separator, e.g. `1 234.57`
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", usize::from(decimals), value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    // "-0.00" reads badly in a money column
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// ISO datetime to `DD.MM.YYYY HH:MM:SS`; unparsable input is returned as is
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', 'Z', '+'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// ISO date (or datetime) to `DD.MM.YYYY`
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STATUS: &[BadgeStyle] = &[
        BadgeStyle::new("active", "Active", BadgeVariant::Success),
        BadgeStyle::new("suspended", "Suspended", BadgeVariant::Error),
    ];

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 4), "1 234.5670");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59:59");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_cell_formats() {
        assert_eq!(CellFormat::Text.format(&json!("abc")), "abc");
        assert_eq!(CellFormat::Text.format(&json!(42)), "42");
        assert_eq!(CellFormat::Text.format(&Value::Null), "");
        assert_eq!(
            CellFormat::Currency { code: "USD" }.format(&json!(1500.5)),
            "1 500.50 USD"
        );
        assert_eq!(CellFormat::Number { decimals: 0 }.format(&json!("2500")), "2 500");
        assert_eq!(CellFormat::Percent { decimals: 1 }.format(&json!(12.345)), "12.3%");
        assert_eq!(CellFormat::YES_NO.format(&json!(true)), "Yes");
        assert_eq!(CellFormat::Date.format(&json!("2025-01-02T10:00:00Z")), "02.01.2025");
    }

    #[test]
    fn test_non_numeric_value_falls_back_to_raw() {
        assert_eq!(CellFormat::Currency { code: "EUR" }.format(&json!("n/a")), "n/a");
    }

    #[test]
    fn test_badge_format_and_variant() {
        let format = CellFormat::Badge(STATUS);
        assert_eq!(format.format(&json!("active")), "Active");
        assert_eq!(format.format(&json!("archived")), "archived");
        assert_eq!(format.badge_variant(&json!("suspended")), Some(BadgeVariant::Error));
        assert_eq!(format.badge_variant(&json!("archived")), Some(BadgeVariant::Neutral));
        assert_eq!(CellFormat::Text.badge_variant(&json!("active")), None);
    }

    #[test]
    fn test_custom_formatter() {
        fn upper(value: &Value) -> String {
            plain_text(value).to_uppercase()
        }
        assert_eq!(CellFormat::Custom(upper).format(&json!("eurusd")), "EURUSD");
    }

    #[test]
    fn test_plain_text_of_array() {
        assert_eq!(plain_text(&json!(["a", 1, true])), "a, 1, true");
    }
}
