use leptos::prelude::*;

use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::guard::RequireAuth;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "Dashboard starting, API port {}, page size {}",
        config.api.port,
        config.table.page_size
    );
    provide_context(config);

    view! {
        <AuthProvider>
            <RequireAuth>
                <Shell />
            </RequireAuth>
        </AuthProvider>
    }
}
