//! Fallback decorator
//!
//! Capability-preserving wrapper: try the primary, serve the fallback's
//! result only after the primary fails.

use std::sync::Arc;

use crate::items::capability::{Capability, Item, ItemsError, ItemsService};

/// Tries `primary` first; on failure forwards `fallback`'s result verbatim.
///
/// Strictly sequential: the fallback does not start until the primary's
/// outcome is in, and is skipped entirely on primary success. At most one of
/// the two performs its side effects for a single load.
pub struct FallbackItems {
    primary: Arc<dyn ItemsService>,
    fallback: Arc<dyn ItemsService>,
}

impl FallbackItems {
    pub fn new(primary: Arc<dyn ItemsService>, fallback: Arc<dyn ItemsService>) -> Self {
        Self { primary, fallback }
    }
}

impl Capability for FallbackItems {
    fn name(&self) -> &'static str {
        "fallback-items"
    }
}

#[async_trait::async_trait]
impl ItemsService for FallbackItems {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError> {
        match self.primary.load_items().await {
            Ok(items) => Ok(items),
            // Intermediate failures are swallowed; the fallback's outcome is
            // the one the caller sees.
            Err(_) => self.fallback.load_items().await,
        }
    }
}
