//! Resource adapters
//!
//! Translate concrete clients and the cache into the items capability. Each
//! adapter wraps exactly one collaborator, shapes its records, and binds a
//! selection action that captures the record value. Collaborators arrive at
//! construction; there are no shared singletons to reach for.

pub mod cards;
pub mod friends;
pub mod transfers;

pub use cards::*;
pub use friends::*;
pub use transfers::*;

use std::sync::Arc;

/// Screen-supplied sink for record selection, invoked synchronously when an
/// item's action fires.
pub type SelectionSink<T> = Arc<dyn Fn(T) + Send + Sync>;
