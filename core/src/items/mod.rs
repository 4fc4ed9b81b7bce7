//! Items capability and resilience decorators
//!
//! The uniform async load-items contract every list screen consumes, plus
//! the capability-preserving wrappers that add fallback and retry without
//! changing the interface.

pub mod capability;
pub mod disabled;
pub mod fallback;
pub mod retry;

#[cfg(test)]
pub(crate) mod testing;

pub use capability::*;
pub use disabled::*;
pub use fallback::*;
pub use retry::*;
