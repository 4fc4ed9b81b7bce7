//! Capability traits
//!
//! Base trait + the async items capability. No resource knowledge here:
//! adapters translate concrete clients into this contract, decorators wrap
//! it, screens consume it.

use std::fmt;
use std::sync::Arc;

/// Base capability trait for identity
pub trait Capability: Send + Sync {
    fn name(&self) -> &'static str;
}

/// Zero-argument selection action bound into an item at mapping time.
pub type SelectAction = Arc<dyn Fn() + Send + Sync>;

/// Display-ready projection of a domain record.
///
/// Pure projection: it never round-trips back into the domain model. The
/// selection action captures the specific record it was mapped from, so
/// reordering between loads cannot select the wrong record.
#[derive(Clone)]
pub struct Item {
    title: String,
    detail: Option<String>,
    on_select: SelectAction,
}

impl Item {
    pub fn new(title: impl Into<String>, detail: Option<String>, on_select: SelectAction) -> Self {
        Self {
            title: title.into(),
            detail,
            on_select,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Fire the selection action.
    pub fn select(&self) {
        (self.on_select)()
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("title", &self.title)
            .field("detail", &self.detail)
            .finish()
    }
}

/// Items capability error
///
/// A single opaque failure kind carrying a human-readable message. Error
/// classification, if any, is the collaborator client's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsError {
    pub message: String,
}

impl ItemsError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }

    /// Error reported by the disabled (null) capability.
    pub fn disabled() -> Self {
        Self::new("items loading disabled")
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load failed: {}", self.message)
    }
}

impl std::error::Error for ItemsError {}

/// Items capability - load display-ready items
///
/// Exactly one outcome per invocation. Callers should not issue a second
/// `load_items` before the previous one resolves; the capability layer does
/// not synchronize overlapping loads.
#[async_trait::async_trait]
pub trait ItemsService: Capability {
    async fn load_items(&self) -> Result<Vec<Item>, ItemsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn item_exposes_display_fields() {
        let item = Item::new("Ana", Some("+385 91 111 2222".to_string()), Arc::new(|| {}));
        assert_eq!(item.title(), "Ana");
        assert_eq!(item.detail(), Some("+385 91 111 2222"));
    }

    #[test]
    fn select_fires_the_bound_action() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let item = Item::new(
            "Ana",
            None,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        item.select();
        item.select();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn disabled_error_is_distinguishable() {
        assert_eq!(ItemsError::disabled(), ItemsError::disabled());
        assert_ne!(ItemsError::disabled(), ItemsError::new("net error"));
    }
}
