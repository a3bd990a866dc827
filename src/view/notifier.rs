//! View notifier trait for presentation layers.
//!
//! The core never renders. Callers implement `ViewNotifier` and drive it
//! after each state change, either method by method or through `refresh`
//! and `announce`.

use crate::board::{Board, Point};
use crate::session::{Session, SubmitOutcome};

/// Banners shown after an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Correct,
    Incorrect,
    /// The player reached the castle.
    Won,
}

impl Banner {
    /// Default player-facing text.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Banner::Correct => "🎉 Correct! Moving forward.",
            Banner::Incorrect => "❌ Incorrect! Try again.",
            Banner::Won => "🎉 Congratulations! You've reached the Candy Castle!",
        }
    }
}

/// Presentation callbacks.
///
/// ## Implementation Notes
///
/// - `render_tiles`: Called with the full board; boards clone in O(1)
/// - `render_player`: Coordinate is the tile the player stands on
/// - `display_message`: Hints, revealed answers and informational errors;
///   ignored unless overridden
pub trait ViewNotifier {
    fn render_tiles(&mut self, board: &Board);

    fn render_player(&mut self, icon: &str, coordinate: Point);

    fn render_hints(&mut self, remaining: u32);

    fn display_question(&mut self, prompt: &str);

    fn display_banner(&mut self, banner: Banner);

    fn display_message(&mut self, _message: &str) {}
}

/// Redraw everything for `session`.
pub fn refresh<V: ViewNotifier + ?Sized>(session: &Session, view: &mut V) {
    view.render_tiles(session.board());
    render_player(session, view);
    view.render_hints(session.hints().remaining());
    if let Some(question) = session.active_question() {
        view.display_question(&question.prompt);
    }
}

/// Show the result of `submit_answer` and move the player marker.
///
/// A winning answer shows `Correct` followed by `Won`.
pub fn announce<V: ViewNotifier + ?Sized>(session: &Session, outcome: &SubmitOutcome, view: &mut V) {
    if !outcome.correct {
        view.display_banner(Banner::Incorrect);
        return;
    }

    view.display_banner(Banner::Correct);
    render_player(session, view);
    if outcome.reached_end {
        view.display_banner(Banner::Won);
    }
}

fn render_player<V: ViewNotifier + ?Sized>(session: &Session, view: &mut V) {
    if let Some(coordinate) = session.player_coordinate() {
        view.render_player(session.character_icon(), coordinate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        assert_eq!(Banner::Incorrect.text(), "❌ Incorrect! Try again.");
        assert!(Banner::Won.text().contains("Candy Castle"));
    }
}
