use leptos::prelude::*;

use super::ActivePage;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar(active: RwSignal<ActivePage>) -> impl IntoView {
    let auth = use_auth();

    view! {
        <nav class="app-sidebar__content">
            {ActivePage::ALL.into_iter().map(|page| {
                view! {
                    <Show when=move || !page.admin_only() || auth.is_admin()>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || active.get() == page
                            on:click=move |_| active.set(page)
                        >
                            {icon(page.icon())}
                            <span class="app-sidebar__label">{page.label()}</span>
                        </div>
                    </Show>
                }
            }).collect_view()}
        </nav>
    }
}
