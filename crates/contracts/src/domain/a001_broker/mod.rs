use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokerStatus {
    Active,
    #[default]
    Pending,
    Suspended,
}

/// Brokerage account the desk routes orders through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broker {
    pub id: String,
    pub code: String,
    pub name: String,
    pub country: Option<String>,
    pub status: BrokerStatus,
    pub currency: String,
    pub account_balance: f64,
    pub contact_email: Option<String>,
    pub created_at: String,
}
