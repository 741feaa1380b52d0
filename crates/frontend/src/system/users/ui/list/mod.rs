use contracts::shared::table::SortOrder;
use contracts::system::users::User;
use leptos::prelude::*;

use crate::shared::forms::{FieldConfig, FieldKind, FormValue, FormValues, SelectOption};
use crate::shared::resource_page::ResourcePage;
use crate::shared::table::{BadgeStyle, BadgeVariant, CellFormat, ColumnDef, FilterDef, FilterOption};
use crate::system::auth::guard::RequireAdmin;

const USER_ROLE: &[BadgeStyle] = &[
    BadgeStyle::new("admin", "Admin", BadgeVariant::Primary),
    BadgeStyle::new("trader", "Trader", BadgeVariant::Success),
    BadgeStyle::new("viewer", "Viewer", BadgeVariant::Neutral),
];

const MIN_PASSWORD_LEN: usize = 8;

fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("username", "Username").always_visible().min_width(140.0),
        ColumnDef::new("full_name", "Full name").min_width(160.0),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("role", "Role").format(CellFormat::Badge(USER_ROLE)),
        ColumnDef::new("is_active", "Active").format(CellFormat::YES_NO),
        ColumnDef::new("created_at", "Created").format(CellFormat::DateTime),
        ColumnDef::new("last_login_at", "Last login").format(CellFormat::DateTime),
    ]
}

fn filters() -> Vec<FilterDef> {
    vec![
        FilterDef::multi(
            "role",
            "Role",
            USER_ROLE.iter().map(|r| FilterOption::new(r.value, r.label)).collect(),
        ),
        FilterDef::single(
            "is_active",
            "Active",
            vec![FilterOption::new("true", "Yes"), FilterOption::new("false", "No")],
        ),
    ]
}

/// Blank keeps the current password on edit
fn check_password(value: &FormValue, _: &FormValues) -> Result<(), String> {
    let password = value.as_text();
    if password.is_empty() || password.chars().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ))
    }
}

fn fields() -> Vec<FieldConfig> {
    vec![
        FieldConfig::new("username", "Username", FieldKind::Text).required(),
        FieldConfig::new("password", "Password", FieldKind::Password)
            .help("Leave empty to keep the current password")
            .validate_with(check_password),
        FieldConfig::new("full_name", "Full name", FieldKind::Text),
        FieldConfig::new("email", "Email", FieldKind::Email),
        FieldConfig::new(
            "role",
            "Role",
            FieldKind::select(
                USER_ROLE
                    .iter()
                    .map(|r| SelectOption::new(r.value, r.label))
                    .collect(),
            ),
        )
        .required()
        .default_value(FormValue::Text("viewer".to_string())),
        FieldConfig::new("is_active", "Active", FieldKind::Checkbox)
            .default_value(FormValue::Bool(true)),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <ResourcePage<User>
                title="Users"
                path="/api/users"
                table_key="users"
                item_name="user"
                columns=columns()
                filters=filters()
                fields=fields()
                search_fields=vec![
                    "username".to_string(),
                    "full_name".to_string(),
                    "email".to_string(),
                ]
                default_sort=("username".to_string(), SortOrder::Asc)
            />
        </RequireAdmin>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rule() {
        let values = FormValues::default();
        assert!(check_password(&FormValue::Text(String::new()), &values).is_ok());
        assert!(check_password(&FormValue::Text("s3cretpass".into()), &values).is_ok());
        assert_eq!(
            check_password(&FormValue::Text("short".into()), &values),
            Err("Password must be at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_invalid_email_is_reported() {
        let fields = fields();
        let mut values = FormValues::initial(&fields);
        values.set("username", FormValue::Text("jdoe".into()));
        values.set("email", FormValue::Text("not-an-email".into()));
        let errors = crate::shared::forms::validate(&fields, &values).unwrap_err();
        assert_eq!(errors.get("email"), Some("Email must be a valid email"));
        assert_eq!(errors.len(), 1);
    }
}
