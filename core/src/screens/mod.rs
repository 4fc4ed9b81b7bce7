//! Screen bindings
//!
//! The list screens are uniform and mechanical: hold one composed
//! capability, refresh it, render whatever comes back. Rendering itself
//! lives with the caller.

pub mod list;

pub use list::*;
