//! Friends cache
//!
//! Replace-all store for friend records. Only the remote friends adapter
//! ever writes it; every other party reads.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::domain::Friend;

/// Cache error
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache is empty")]
    Empty,
    #[error("corrupt cache: {0}")]
    Corrupt(String),
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Replace-all store for friend records.
#[async_trait::async_trait]
pub trait FriendsStore: Send + Sync {
    /// Replace the cached records wholesale.
    ///
    /// Fire-and-forget: there is no completion and no error channel.
    /// Implementations log their own failures.
    fn save(&self, friends: &[Friend]);

    /// Load the cached records.
    async fn load(&self) -> Result<Vec<Friend>, CacheError>;
}
