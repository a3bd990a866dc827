//! Boundary to the presentation layer.
//!
//! Views implement `ViewNotifier`; the caller decides when to notify them.

pub mod notifier;

pub use notifier::{announce, refresh, Banner, ViewNotifier};
