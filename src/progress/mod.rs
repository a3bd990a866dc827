//! Progress tracking: clamped forward movement and win detection.

pub mod tracker;

pub use tracker::Progress;
