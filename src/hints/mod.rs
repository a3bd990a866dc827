//! Hint budget: a finite counter gating hint reveals.

pub mod budget;

pub use budget::{derive_hint, HintBudget};
