//! Quiz bank, question selection and answer grading.
//!
//! ## Components
//!
//! - `Question` / `Difficulty`: Immutable prompt and reference answer
//! - `QuizBank`: Questions keyed by difficulty, random draw via `QuizRng`
//! - `grade_answer`: Strict trimmed, case-insensitive literal match
//! - `schema`: The candy tables the built-in questions query

pub mod bank;
pub mod grading;
pub mod question;
pub mod schema;

pub use bank::QuizBank;
pub use grading::grade_answer;
pub use question::{Difficulty, Question};
pub use schema::describe_schema;
