use contracts::domain::a001_broker::Broker;
use contracts::shared::table::SortOrder;
use leptos::prelude::*;

use crate::shared::forms::{FieldConfig, FieldKind, FormValue, SelectOption};
use crate::shared::resource_page::ResourcePage;
use crate::shared::table::{BadgeStyle, BadgeVariant, CellFormat, ColumnDef, FilterDef, FilterOption};

pub const BROKER_STATUS: &[BadgeStyle] = &[
    BadgeStyle::new("active", "Active", BadgeVariant::Success),
    BadgeStyle::new("pending", "Pending", BadgeVariant::Warning),
    BadgeStyle::new("suspended", "Suspended", BadgeVariant::Error),
];

const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CHF", "JPY"];

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("code", "Code").always_visible().min_width(90.0),
        ColumnDef::new("name", "Name").always_visible().min_width(180.0),
        ColumnDef::new("country", "Country"),
        ColumnDef::new("status", "Status").format(CellFormat::Badge(BROKER_STATUS)),
        ColumnDef::new("currency", "Currency").min_width(80.0),
        ColumnDef::new("account_balance", "Balance")
            .format(CellFormat::Number { decimals: 2 })
            .min_width(120.0),
        ColumnDef::new("contact_email", "Contact").not_sortable(),
        ColumnDef::new("created_at", "Created").format(CellFormat::DateTime),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::single(
            "status",
            "Status",
            BROKER_STATUS
                .iter()
                .map(|s| FilterOption::new(s.value, s.label))
                .collect(),
        ),
        FilterDef::multi(
            "currency",
            "Currency",
            CURRENCIES.iter().map(|c| FilterOption::new(*c, *c)).collect(),
        ),
    ]
}

fn fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("code", "Code", FieldKind::Text)
            .required()
            .placeholder("IBKR")
            .validate_with(|value, _| {
                let code = value.as_text();
                let code = code.trim();
                if code.is_empty() {
                    Err("Code is required".to_string())
                } else if code.len() > 12 || !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    Err("Code must be up to 12 letters, digits or underscores".to_string())
                } else {
                    Ok(())
                }
            }),
        FieldConfig::new("name", "Name", FieldKind::Text).required(),
        FieldConfig::new("country", "Country", FieldKind::Text),
        FieldConfig::new(
            "status",
            "Status",
            FieldKind::select(
                BROKER_STATUS
                    .iter()
                    .map(|s| SelectOption::new(s.value, s.label))
                    .collect(),
            ),
        )
        .required()
        .default_value(FormValue::Text("pending".to_string())),
        FieldConfig::new(
            "currency",
            "Currency",
            FieldKind::select(CURRENCIES.iter().map(|c| SelectOption::new(*c, *c)).collect()),
        )
        .required()
        .default_value(FormValue::Text("USD".to_string())),
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
        FieldConfig::new("contact_email", "Contact email", FieldKind::Email)
            .help("Receives margin calls and statements"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn BrokerList() -> impl IntoView {
    view! {
        <ResourcePage<Broker>
            title="Brokers"
            path="/api/brokers"
            table_key="brokers"
            item_name="broker"
            columns=columns()
            filters=filters()
            fields=fields()
            search_fields=vec!["code".to_string(), "name".to_string()]
            default_sort=("name".to_string(), SortOrder::Asc)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::{validate, FormValues};

    #[test]
    fn test_code_rule_replaces_required_check() {
        let fields = fields();
        let mut values = FormValues::initial(&fields);
        values.set("name", FormValue::Text("Interactive".into()));
        values.set("account_balance", FormValue::Text("100".into()));

        values.set("code", FormValue::Text("IB KR".into()));
        let errors = validate(&fields, &values).unwrap_err();
        assert_eq!(
            errors.get("code"),
            Some("Code must be up to 12 letters, digits or underscores")
        );

        values.set("code", FormValue::Text("IBKR".into()));
        assert!(validate(&fields, &values).is_ok());
    }

    #[test]
    fn test_status_badges_cover_every_filter_option() {
        let status = &filters()[0];
        assert_eq!(status.options.len(), BROKER_STATUS.len());
        assert!(columns().iter().any(|c| c.id == "status"));
    }
}
