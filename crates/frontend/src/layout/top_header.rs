use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

/// Application title, signed-in user and logout
#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user_signal();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Broker Admin"</span>
            </div>
            <div class="top-header__actions">
                {move || user.get().map(|u| view! {
                    <span class="top-header__user">{u.display_name().to_string()}</span>
                })}
                <button
                    class="top-header__icon-btn"
                    title="Log out"
                    on:click=move |_| auth.logout()
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
