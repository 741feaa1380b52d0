use contracts::domain::a003_trade::Trade;
use contracts::shared::table::SortOrder;
use leptos::prelude::*;

use crate::shared::forms::{FieldConfig, FieldKind, FormValue, SelectOption};
use crate::shared::resource_page::ResourcePage;
use crate::shared::table::{BadgeStyle, BadgeVariant, CellFormat, ColumnDef, FilterDef, FilterOption};

const TRADE_SIDE: &[BadgeStyle] = &[
    BadgeStyle::new("buy", "Buy", BadgeVariant::Success),
    BadgeStyle::new("sell", "Sell", BadgeVariant::Error),
];

const TRADE_STATUS: &[BadgeStyle] = &[
    BadgeStyle::new("open", "Open", BadgeVariant::Primary),
    BadgeStyle::new("filled", "Filled", BadgeVariant::Success),
    BadgeStyle::new("cancelled", "Cancelled", BadgeVariant::Neutral),
    BadgeStyle::new("rejected", "Rejected", BadgeVariant::Error),
];

fn options(styles: &[BadgeStyle]) -> Vec<SelectOption> {
    styles.iter().map(|s| SelectOption::new(s.value, s.label)).collect()
}

fn filter_options(styles: &[BadgeStyle]) -> Vec<FilterOption> {
    styles.iter().map(|s| FilterOption::new(s.value, s.label)).collect()
}

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("symbol", "Symbol").always_visible().min_width(90.0),
        ColumnDef::new("side", "Side").format(CellFormat::Badge(TRADE_SIDE)).min_width(70.0),
        ColumnDef::new("quantity", "Quantity").format(CellFormat::Number { decimals: 4 }),
        ColumnDef::new("price", "Price").format(CellFormat::Number { decimals: 2 }),
        ColumnDef::new("status", "Status").format(CellFormat::Badge(TRADE_STATUS)),
        ColumnDef::new("broker_name", "Broker"),
        ColumnDef::new("executed_at", "Executed").format(CellFormat::DateTime),
        ColumnDef::new("created_at", "Created").format(CellFormat::DateTime),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::single("side", "Side", filter_options(TRADE_SIDE)),
        FilterDef::multi("status", "Status", filter_options(TRADE_STATUS)),
    ]
}

fn fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new(
            "broker_id",
            "Broker",
            FieldKind::searchable("/api/brokers", "id", "name"),
        )
        .required(),
        FieldConfig::new("symbol", "Symbol", FieldKind::Text)
            .required()
            .placeholder("AAPL")
            .validate_with(|value, _| {
                let symbol = value.as_text();
                let symbol = symbol.trim();
                if symbol.is_empty() {
                    Err("Symbol is required".to_string())
                } else if symbol.chars().any(|c| c.is_ascii_lowercase() || c.is_whitespace()) {
                    Err("Symbol must be upper case without spaces".to_string())
                } else {
                    Ok(())
                }
            }),
        FieldConfig::new("side", "Side", FieldKind::select(options(TRADE_SIDE)))
            .required()
            .default_value(FormValue::Text("buy".to_string())),
        FieldConfig::new(
            "quantity",
            "Quantity",
            FieldKind::Number {
                min: Some(0.0001),
                max: None,
                step: Some(0.0001),
                dynamic_min: None,
                dynamic_max: None,
            },
        )
        .required(),
        FieldConfig::new(
            "price",
            "Price",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
                step: Some(0.01),
                dynamic_min: None,
                dynamic_max: None,
            },
        )
        .required(),
        FieldConfig::new("status", "Status", FieldKind::select(options(TRADE_STATUS)))
            .required()
            .default_value(FormValue::Text("open".to_string())),
        FieldConfig::new("executed_at", "Executed at", FieldKind::DateTime)
            .required()
            .show_when("status", &["filled"]),
        FieldConfig::new("notes", "Notes", FieldKind::Textarea { rows: 3 }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn TradeList() -> impl IntoView {
    view! {
        <ResourcePage<Trade>
            title="Trades"
            path="/api/trades"
            table_key="trades"
            item_name="trade"
            columns=columns()
            filters=filters()
            fields=fields()
            search_fields=vec!["symbol".to_string(), "broker_name".to_string()]
            default_sort=("created_at".to_string(), SortOrder::Desc)
        />
    }
}
