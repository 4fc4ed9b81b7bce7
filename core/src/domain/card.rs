use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A payment card attached to the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub number: String,
    pub holder: String,
}
