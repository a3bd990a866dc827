//! Session phases and the values session operations hand back.

use serde::{Deserialize, Serialize};

use crate::quiz::Difficulty;

/// Where a session is in its question/answer cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No question pending.
    #[default]
    Idle,
    /// A question was selected and has not been answered correctly yet.
    AwaitingAnswer,
    /// The player reached the castle. Questions and hints still work but
    /// the position no longer changes.
    Completed,
}

/// Result of grading a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub new_position: usize,
    pub reached_end: bool,
}

/// The active question's answer, shown on request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerReveal {
    pub answer: String,
    pub explanation: &'static str,
}

/// Explanation attached to every revealed answer.
pub const ANSWER_EXPLANATION: &str =
    "This query retrieves the requested data using SQL filtering and joins as needed.";

impl AnswerReveal {
    pub(crate) fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            explanation: ANSWER_EXPLANATION,
        }
    }
}

impl std::fmt::Display for AnswerReveal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Answer: {}\n\nExplanation: {}", self.answer, self.explanation)
    }
}

/// Read-only snapshot for the view layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub position: usize,
    pub board_size: usize,
    pub hints_remaining: u32,
    pub hint_max: u32,
    pub phase: SessionPhase,
    pub character_icon: String,
    pub active_prompt: Option<String>,
    pub active_difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase() {
        assert_eq!(SessionPhase::default(), SessionPhase::Idle);
    }

    #[test]
    fn test_reveal_display() {
        let reveal = AnswerReveal::new("SELECT 1;");
        assert_eq!(
            reveal.to_string(),
            "Answer: SELECT 1;\n\nExplanation: This query retrieves the requested data using SQL filtering and joins as needed."
        );
    }
}
