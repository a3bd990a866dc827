//! Answer grading.
//!
//! Grading is a strict literal match: the submission is trimmed and compared
//! case-insensitively with the canonical answer. Two queries that return the
//! same rows but are written differently are graded as wrong.

use log::debug;

use super::question::Question;

/// True iff `submitted`, trimmed, equals the canonical answer ignoring case.
#[must_use]
pub fn grade_answer(question: &Question, submitted: &str) -> bool {
    let correct = normalize(submitted) == question.canonical_answer.to_lowercase();
    debug!(
        "graded answer for {:?}: {}",
        question.prompt,
        if correct { "correct" } else { "incorrect" }
    );
    correct
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Difficulty;

    fn candyland() -> Question {
        Question::new(
            "Find all candy shops in 'Candyland'.",
            "SELECT * FROM candy_shops WHERE location = 'Candyland';",
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_exact_match() {
        let q = candyland();
        assert!(grade_answer(&q, "SELECT * FROM candy_shops WHERE location = 'Candyland';"));
    }

    #[test]
    fn test_case_and_outer_whitespace_ignored() {
        let q = candyland();
        assert!(grade_answer(
            &q,
            "  select * from candy_shops where location = 'candyland';  "
        ));
        assert!(grade_answer(
            &q,
            "\n\tSELECT * FROM CANDY_SHOPS WHERE LOCATION = 'CANDYLAND';\n"
        ));
    }

    #[test]
    fn test_inner_whitespace_matters() {
        let q = candyland();
        assert!(!grade_answer(&q, "SELECT *  FROM candy_shops WHERE location = 'Candyland';"));
    }

    #[test]
    fn test_equivalent_sql_is_rejected() {
        let q = candyland();
        assert!(!grade_answer(&q, "SELECT * FROM candy_shops WHERE location = 'Candyland'"));
        assert!(!grade_answer(&q, "SELECT * FROM candy_shops WHERE 'Candyland' = location;"));
    }

    #[test]
    fn test_empty_submission() {
        assert!(!grade_answer(&candyland(), "   "));
    }
}
