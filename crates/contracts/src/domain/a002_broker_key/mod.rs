use serde::{Deserialize, Serialize};

/// What a key is allowed to do at the broker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyScope {
    #[default]
    Read,
    Trade,
    Withdraw,
}

/// API credential issued by a broker. The secret never leaves the server,
/// only its masked form is listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerKey {
    pub id: String,
    pub broker_id: String,
    pub broker_name: Option<String>,
    pub label: String,
    pub api_key_masked: String,
    pub scope: KeyScope,
    /// Only set for withdraw-scoped keys
    pub withdrawal_address: Option<String>,
    pub account_balance: f64,
    pub spend_limit: Option<f64>,
    pub is_active: bool,
    pub expires_at: Option<String>,
    pub created_at: String,
}
