//! Resilient data loading for the PayDash account dashboard.
//!
//! List screens consume one composed [`items::ItemsService`]. Fallback and
//! retry decorators add resilience without changing the interface; adapters
//! translate the remote API and the friends cache into the capability; the
//! UI dispatcher carries outcomes back onto the screen-owning thread.

pub mod adapters;
pub mod api;
pub mod cache;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod items;
pub mod screens;

// Re-exports for convenience
pub use config::Config;
pub use dispatch::{ui_channel, UiDispatcher, UiQueue};
pub use items::{Item, ItemsError, ItemsService};
