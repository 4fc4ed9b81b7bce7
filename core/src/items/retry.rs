//! Retry decorator
//!
//! Retry-of-N is fallback-of-1 chained against the same service N times. A
//! retried load is just a deeper fallback chain, so retry inherits the
//! sequencing and delivery guarantees of [`FallbackItems`] for free.

use std::sync::Arc;

use crate::items::capability::ItemsService;
use crate::items::fallback::FallbackItems;

/// Wrap `service` so a failed load is re-attempted up to `retries` more
/// times, for `retries + 1` total attempts against the same service.
///
/// The error surfaced after exhaustion is the one from the last attempt,
/// i.e. the most recent failure reason. `retries = 0` returns the service
/// unwrapped.
pub fn with_retries(service: Arc<dyn ItemsService>, retries: u32) -> Arc<dyn ItemsService> {
    let mut chain = service.clone();
    for _ in 0..retries {
        chain = Arc::new(FallbackItems::new(chain, service.clone()));
    }
    chain
}
