//! Session tokens persisted by the login page.
//!
//! Both tokens live in one JSON entry so they can never drift apart.

use serde::{Deserialize, Serialize};
use web_sys::window;

const SESSION_KEY: &str = "broker-admin-session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Decode a stored entry; blank or corrupt entries count as no session
pub fn parse_tokens(raw: &str) -> Option<StoredTokens> {
    serde_json::from_str::<StoredTokens>(raw)
        .ok()
        .filter(|t| !t.access_token.trim().is_empty())
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load() -> Option<StoredTokens> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
    let tokens = parse_tokens(&raw);
    if tokens.is_none() {
        log::warn!("Ignoring unreadable session entry");
    }
    tokens
}

pub fn save(tokens: &StoredTokens) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(tokens) {
        Ok(raw) => {
            if storage.set_item(SESSION_KEY, &raw).is_err() {
                log::warn!("Could not persist session");
            }
        }
        Err(e) => log::warn!("Could not encode session: {}", e),
    }
}

/// Replace the access token, keeping the refresh token
pub fn update_access_token(access_token: &str) {
    let refresh_token = load().and_then(|t| t.refresh_token);
    save(&StoredTokens {
        access_token: access_token.to_string(),
        refresh_token,
    });
}

pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
