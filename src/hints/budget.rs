//! Finite hint budget and hint text derivation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{QuestError, Result};
use crate::quiz::Question;

/// Used when a prompt has no quoted literal to point at.
const FALLBACK_KEY: &str = "the key condition";

/// Remaining hints out of a fixed maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintBudget {
    remaining: u32,
    max: u32,
}

impl HintBudget {
    /// A full budget of `max` hints.
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self { remaining: max, max }
    }

    #[must_use]
    pub const fn remaining(self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.remaining == 0
    }

    /// Spend one hint on `question`.
    ///
    /// An exhausted budget is reported before a missing question. On
    /// failure the budget is untouched.
    pub fn take_hint(self, question: Option<&Question>) -> Result<(String, HintBudget)> {
        if self.is_exhausted() {
            return Err(QuestError::NoHintsRemaining);
        }
        let question = question.ok_or(QuestError::NoActiveQuestion)?;

        let hint = derive_hint(&question.prompt);
        let budget = HintBudget {
            remaining: self.remaining - 1,
            max: self.max,
        };
        debug!("hint taken, {} of {} left", budget.remaining, budget.max);
        Ok((hint, budget))
    }

    /// Refill to the maximum.
    #[must_use]
    pub const fn reset(self) -> HintBudget {
        HintBudget::new(self.max)
    }
}

/// Hint text for a prompt.
///
/// Points at the text between the first pair of single quotes, the usual
/// place a prompt names the value to filter on.
#[must_use]
pub fn derive_hint(prompt: &str) -> String {
    let key = prompt
        .split('\'')
        .nth(1)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_KEY);
    format!("Hint: Think about filtering with WHERE on '{key}'.")
}
