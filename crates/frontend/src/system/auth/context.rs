use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api::ApiError;
use crate::shared::config::AppConfig;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Session capabilities handed to pages and tables.
///
/// Components never read tokens from storage themselves; they receive this
/// handle (via context) and ask it for the token, the user, or a logout.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new(initial: AuthState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    pub fn get_token(&self) -> Option<String> {
        self.state
            .try_with_untracked(|s| s.access_token.clone())
            .flatten()
    }

    pub fn get_user(&self) -> Option<UserInfo> {
        self.state.try_with_untracked(|s| s.user_info.clone()).flatten()
    }

    /// Reactive: re-runs the caller when the session changes
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    /// Reactive: re-runs the caller when the session changes
    pub fn is_admin(&self) -> bool {
        self.state
            .with(|s| s.user_info.as_ref().map(|u| u.is_admin()).unwrap_or(false))
    }

    pub fn user_signal(&self) -> Signal<Option<UserInfo>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user_info.clone()))
    }

    fn set_session(&self, access_token: String, user_info: Option<UserInfo>) {
        self.state.set(AuthState {
            access_token: Some(access_token),
            user_info,
        });
    }

    pub fn logout(&self) {
        storage::clear();
        if self.state.try_set(AuthState::default()).is_some() {
            log::debug!("logout on a disposed auth context");
        }
        log::info!("Session closed");
    }
}

/// Auth context provider component
///
/// Restores the session saved by the login page: validates the stored access
/// token against `/api/auth/me`, refreshes it once when rejected, and clears the
/// storage when both fail.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let port = use_context::<AppConfig>()
        .map(|c| c.api.port)
        .unwrap_or_else(|| AppConfig::load().api.port);

    let initial = AuthState {
        access_token: storage::load().map(|t| t.access_token),
        user_info: None,
    };
    let auth = AuthContext::new(initial);

    if let Some(access_token) = auth.get_token() {
        spawn_local(async move {
            match api::get_current_user(port, &access_token).await {
                Ok(user_info) => auth.set_session(access_token, Some(user_info)),
                Err(ApiError::Unauthorized) => restore_with_refresh(auth, port).await,
                Err(e) => {
                    // Keep the token: the API may just be unreachable right now
                    log::warn!("Could not load current user: {}", e);
                }
            }
        });
    }

    provide_context(auth);

    children()
}

async fn restore_with_refresh(auth: AuthContext, port: u16) {
    let Some(refresh_token) = storage::load().and_then(|t| t.refresh_token) else {
        auth.logout();
        return;
    };

    let refreshed = match api::refresh_token(port, refresh_token).await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Token refresh failed: {}", e);
            auth.logout();
            return;
        }
    };

    storage::update_access_token(&refreshed.access_token);
    match api::get_current_user(port, &refreshed.access_token).await {
        Ok(user_info) => auth.set_session(refreshed.access_token, Some(user_info)),
        Err(e) => {
            log::warn!("Refreshed token rejected: {}", e);
            auth.logout();
        }
    }
}

/// Hook to access auth capabilities
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
