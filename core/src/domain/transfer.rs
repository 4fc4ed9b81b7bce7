use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A money movement on the account feed.
///
/// `sent` flags direction: true when this account initiated the transfer.
/// The feed mixes both directions; adapters partition it per screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: Uuid,
    pub counterparty: String,
    pub amount_cents: i64,
    pub currency: String,
    pub sent: bool,
    pub date: DateTime<Utc>,
}
