//! Null items capability
//!
//! Stands in for the cache fallback when the account has no cache access,
//! keeping the composition shape uniform.

use crate::items::capability::{Capability, Item, ItemsError, ItemsService};

/// Always fails fast with the dedicated disabled error.
///
/// Owns no collaborators, so it cannot write a cache or produce any other
/// side effect regardless of how it is composed.
pub struct DisabledItems;

impl Capability for DisabledItems {
    fn name(&self) -> &'static str {
        "disabled-items"
    }
}

#[async_trait::async_trait]
impl ItemsService for DisabledItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        Err(ItemsError::disabled())
    }
}
