use contracts::domain::a002_broker_key::BrokerKey;
use contracts::shared::table::SortOrder;
use leptos::prelude::*;

use crate::shared::forms::{FieldConfig, FieldKind, FormValue, FormValues, SelectOption};
use crate::shared::resource_page::ResourcePage;
use crate::shared::table::{
    BadgeStyle, BadgeVariant, CellFormat, ColumnDef, FilterDef, FilterOption,
};

const KEY_SCOPE: &[BadgeStyle] = &[
    BadgeStyle::new("read", "Read", BadgeVariant::Neutral),
    BadgeStyle::new("trade", "Trade", BadgeVariant::Primary),
    BadgeStyle::new("withdraw", "Withdraw", BadgeVariant::Warning),
];

const KEY_STATE: &[BadgeStyle] = &[
    BadgeStyle::new("true", "Active", BadgeVariant::Success),
    BadgeStyle::new("false", "Revoked", BadgeVariant::Neutral),
];

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("label", "Label").always_visible().min_width(160.0),
        ColumnDef::new("broker_name", "Broker").field("broker_name"),
        ColumnDef::new("api_key_masked", "API key").not_sortable(),
        ColumnDef::new("scope", "Scope").format(CellFormat::Badge(KEY_SCOPE)),
        ColumnDef::new("account_balance", "Balance").format(CellFormat::Number { decimals: 2 }),
        ColumnDef::new("spend_limit", "Spend limit").format(CellFormat::Number { decimals: 2 }),
        ColumnDef::new("is_active", "State").format(CellFormat::Badge(KEY_STATE)),
        ColumnDef::new("expires_at", "Expires").format(CellFormat::Date),
        ColumnDef::new("created_at", "Created").format(CellFormat::DateTime),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::multi(
            "scope",
            "Scope",
            KEY_SCOPE.iter().map(|s| FilterOption::new(s.value, s.label)).collect(),
        ),
        FilterDef::single(
            "is_active",
            "State",
            KEY_STATE.iter().map(|s| FilterOption::new(s.value, s.label)).collect(),
        ),
    ]
}

/// A limit is optional, but never above the balance it draws from
fn check_spend_limit(value: &FormValue, values: &FormValues) -> Result<(), String> {
    let text = value.as_text();
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }
    let limit: f64 = text
        .parse()
        .map_err(|_| "Spend limit must be a number".to_string())?;
    if limit < 0.0 {
        return Err("Spend limit cannot be negative".to_string());
    }
    match values.number("account_balance") {
        Some(balance) if limit > balance => Err(format!(
            "Spend limit cannot exceed the account balance ({})",
            balance
        )),
        _ => Ok(()),
    }
}

fn fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("label", "Label", FieldKind::Text)
            .required()
            .placeholder("Desk A / execution"),
        FieldConfig::new(
            "broker_id",
            "Broker",
            FieldKind::searchable("/api/brokers", "id", "name"),
        )
        .required()
        .help("Type at least two letters of the broker name"),
        FieldConfig::new("api_key", "API key", FieldKind::Password)
            .help("Leave empty to keep the current key"),
        FieldConfig::new(
            "scope",
            "Scope",
            FieldKind::select(
                KEY_SCOPE
                    .iter()
                    .map(|s| SelectOption::new(s.value, s.label))
                    .collect(),
            ),
        )
        .required()
        .default_value(FormValue::Text("read".to_string())),
        FieldConfig::new("withdrawal_address", "Withdrawal address", FieldKind::Text)
            .required()
            .show_when("scope", &["withdraw"]),
        FieldConfig::new(
            "account_balance",
            "Account balance",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
                step: Some(0.01),
                dynamic_min: None,
                dynamic_max: None,
            },
        )
        .required(),
        FieldConfig::new(
            "spend_limit",
            "Spend limit",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
                step: Some(0.01),
                dynamic_min: None,
                dynamic_max: Some("account_balance".to_string()),
            },
        )
        .validate_with(check_spend_limit),
        FieldConfig::new("is_active", "Active", FieldKind::Checkbox)
            .default_value(FormValue::Bool(true)),
        FieldConfig::new("expires_at", "Expires", FieldKind::Date),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn BrokerKeyList() -> impl IntoView {
    view! {
        <ResourcePage<BrokerKey>
            title="Broker keys"
            path="/api/broker-keys"
            table_key="broker-keys"
            item_name="key"
            columns=columns()
            filters=filters()
            fields=fields()
            search_fields=vec!["label".to_string(), "broker_name".to_string()]
            default_sort=("created_at".to_string(), SortOrder::Desc)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::validate;

    fn filled() -> (Vec<FieldConfig>, FormValues) {
        let fields = fields();
        let mut values = FormValues::initial(&fields);
        values.set("label", FormValue::Text("Desk A".into()));
        values.set("broker_id", FormValue::Text("b1".into()));
        values.set("account_balance", FormValue::Text("1000".into()));
        (fields, values)
    }

    #[test]
    fn test_spend_limit_follows_balance() {
        let (fields, mut values) = filled();
        values.set("spend_limit", FormValue::Text("1500".into()));
        let errors = validate(&fields, &values).unwrap_err();
        assert_eq!(
            errors.get("spend_limit"),
            Some("Spend limit cannot exceed the account balance (1000)")
        );

        values.set("account_balance", FormValue::Text("2000".into()));
        assert!(validate(&fields, &values).is_ok());
    }

    #[test]
    fn test_withdrawal_address_only_for_withdraw_scope() {
        let (fields, mut values) = filled();
        assert!(validate(&fields, &values).is_ok());

        values.set("scope", FormValue::Text("withdraw".into()));
        let errors = validate(&fields, &values).unwrap_err();
        assert_eq!(errors.get("withdrawal_address"), Some("Withdrawal address is required"));
    }

    #[test]
    fn test_blank_api_key_is_not_sent() {
        let (fields, values) = filled();
        let payload = values.to_payload(&fields);
        assert!(payload.get("api_key").is_none());
        assert_eq!(payload["is_active"], serde_json::json!(true));
    }
}
