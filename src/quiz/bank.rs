//! Question bank keyed by difficulty.
//!
//! The `QuizBank` maps each difficulty to its questions and draws one
//! uniformly at random through an injected `QuizRng`.
//!
//! ## Example
//!
//! ```
//! use candy_quest::core::QuizRng;
//! use candy_quest::quiz::{Difficulty, Question, QuizBank};
//!
//! let bank = QuizBank::new()
//!     .with_question(Question::new("Count shops.", "SELECT COUNT(*) FROM candy_shops;", Difficulty::Easy));
//!
//! let mut rng = QuizRng::new(1);
//! let q = bank.select(Difficulty::Easy, &mut rng).unwrap();
//! assert_eq!(q.prompt, "Count shops.");
//! ```

use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::question::{Difficulty, Question};
use crate::core::{QuestError, QuizRng, Result};

/// Questions grouped by difficulty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizBank {
    categories: FxHashMap<Difficulty, Vec<Question>>,
}

impl QuizBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in candy shop bank: two questions per difficulty over the
    /// `candy_shops` and `candy_ingredients` tables.
    #[must_use]
    pub fn candy_shop() -> Self {
        use Difficulty::{Advanced, Easy, Medium};

        Self::new()
            .with_question(Question::new(
                "Find all candy shops in 'Candyland'.",
                "SELECT * FROM candy_shops WHERE location = 'Candyland';",
                Easy,
            ))
            .with_question(Question::new(
                "Get all candy ingredients that are 'Rare'.",
                "SELECT * FROM candy_ingredients WHERE rarity = 'Rare';",
                Easy,
            ))
            .with_question(Question::new(
                "List all unique candy ingredient rarities.",
                "SELECT DISTINCT rarity FROM candy_ingredients;",
                Medium,
            ))
            .with_question(Question::new(
                "Find the highest-rated candy shops.",
                "SELECT * FROM candy_shops WHERE rating = 5;",
                Medium,
            ))
            .with_question(Question::new(
                "Retrieve candy ingredients and their shop names.",
                "SELECT candy_ingredients.name, candy_shops.name FROM candy_ingredients JOIN candy_shops ON candy_ingredients.shop_id = candy_shops.id;",
                Advanced,
            ))
            .with_question(Question::new(
                "Find the number of ingredients available at each shop.",
                "SELECT COUNT(*) FROM candy_ingredients GROUP BY shop_id;",
                Advanced,
            ))
    }

    /// Add a question under its own difficulty.
    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.insert(question);
        self
    }

    /// Add a question under its own difficulty.
    pub fn insert(&mut self, question: Question) {
        self.categories
            .entry(question.difficulty)
            .or_default()
            .push(question);
    }

    /// Replace a whole category. An empty list is stored as-is and will
    /// fail `validate`.
    pub fn set_category(&mut self, difficulty: Difficulty, questions: Vec<Question>) {
        self.categories.insert(difficulty, questions);
    }

    /// Questions for a difficulty, or `None` if the bank has no such key.
    #[must_use]
    pub fn questions(&self, difficulty: Difficulty) -> Option<&[Question]> {
        self.categories.get(&difficulty).map(Vec::as_slice)
    }

    /// Difficulties present in the bank, easiest first.
    #[must_use]
    pub fn difficulties(&self) -> SmallVec<[Difficulty; 3]> {
        Difficulty::ALL
            .into_iter()
            .filter(|d| self.categories.contains_key(d))
            .collect()
    }

    /// Total number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every difficulty maps to at least one question.
    pub fn validate(&self) -> Result<()> {
        for difficulty in Difficulty::ALL {
            match self.questions(difficulty) {
                None => {
                    return Err(QuestError::Configuration(format!(
                        "quiz bank has no {difficulty} category"
                    )))
                }
                Some([]) => return Err(QuestError::EmptyBank(difficulty)),
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Draw a question of the given difficulty uniformly at random.
    pub fn select(&self, difficulty: Difficulty, rng: &mut QuizRng) -> Result<&Question> {
        let Some(questions) = self.questions(difficulty) else {
            warn!("quiz bank has no {difficulty} category");
            return Err(QuestError::InvalidDifficulty(difficulty.to_string()));
        };

        let Some(question) = rng.choose(questions) else {
            warn!("quiz bank {difficulty} category is empty");
            return Err(QuestError::EmptyBank(difficulty));
        };

        debug!("selected {difficulty} question: {:?}", question.prompt);
        Ok(question)
    }
}
