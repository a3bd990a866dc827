//! Error taxonomy for board, quiz, hint and session operations.
//!
//! Every error is deterministic given its inputs. Nothing in the crate
//! retries automatically; callers decide how to present each kind.

use thiserror::Error;

use crate::quiz::Difficulty;

/// Errors emitted by candy-quest operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuestError {
    /// Board size and layout disagree, or a config value is out of range.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A caller passed a value no well-formed flow produces.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The difficulty is unknown or missing from the bank.
    #[error("unknown difficulty: {0}")]
    InvalidDifficulty(String),

    /// The bank has the difficulty but no questions under it.
    #[error("no questions available for difficulty {0}")]
    EmptyBank(Difficulty),

    #[error("no hints remaining")]
    NoHintsRemaining,

    #[error("no active question")]
    NoActiveQuestion,
}

impl QuestError {
    /// True for conditions a player can trigger in normal play.
    ///
    /// These should become an informational message, not a failure screen.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, QuestError::NoHintsRemaining | QuestError::NoActiveQuestion)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QuestError>;
