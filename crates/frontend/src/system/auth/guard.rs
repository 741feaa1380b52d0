use leptos::prelude::*;

use super::context::use_auth;
use crate::shared::icons::icon;

#[component]
fn AccessNotice(#[prop(into)] message: String, level: &'static str) -> impl IntoView {
    view! {
        <div class=format!("alert alert--{}", level)>
            {icon("lock")}
            <span>{message}</span>
        </div>
    }
}

/// Renders the dashboard only for a signed-in session
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! {
                <AccessNotice message="Your session has ended. Sign in again to manage brokers." level="warning" />
            }
        >
            {children()}
        </Show>
    }
}

/// Admin-only pages; traders see a notice instead
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated() && auth.is_admin()
            fallback=|| view! {
                <AccessNotice message="Only administrators can manage users." level="error" />
            }
        >
            {children()}
        </Show>
    }
}
