//! Core types shared by every component: configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeltaPolicy, GameConfig, Layout, DEFAULT_HINT_MAX, DEFAULT_TOTAL_SPACES};
pub use error::{QuestError, Result};
pub use rng::{QuizRng, QuizRngState};
