//! Questions and difficulty levels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::QuestError;

/// Question category. Affects selection and, by default, move distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuestError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| QuestError::InvalidDifficulty(name.to_string()))
    }
}

/// A prompt with its reference answer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub canonical_answer: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        canonical_answer: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            canonical_answer: canonical_answer.into(),
            difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("ADVANCED".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
    }

    #[test]
    fn test_parse_unknown_difficulty() {
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, QuestError::InvalidDifficulty("expert".to_string()));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
    }

    #[test]
    fn test_difficulty_serde_is_lowercase() {
        let json = serde_json::to_string(&Difficulty::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
    }
}
