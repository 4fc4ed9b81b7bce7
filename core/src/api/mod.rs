//! Remote dashboard API
//!
//! Per-resource client traits plus the reqwest-backed implementation. A
//! client invocation completes at most once; it may complete on any runtime
//! worker thread.

pub mod http;

pub use http::DashboardApi;

use thiserror::Error;

use crate::domain::{Card, Friend, Transfer};

/// Remote fetch error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[async_trait::async_trait]
pub trait FriendsClient: Send + Sync {
    async fn fetch_friends(&self) -> Result<Vec<Friend>, ApiError>;
}

#[async_trait::async_trait]
pub trait CardsClient: Send + Sync {
    async fn fetch_cards(&self) -> Result<Vec<Card>, ApiError>;
}

#[async_trait::async_trait]
pub trait TransfersClient: Send + Sync {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>, ApiError>;
}
