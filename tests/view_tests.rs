//! View boundary tests using a recording notifier.

use candy_quest::{
    announce, refresh, Banner, Board, Difficulty, GameConfig, Point, QuizBank, Session,
    ViewNotifier,
};

#[derive(Debug, PartialEq, Eq)]
enum Call {
    Tiles(usize),
    Player(String, Point),
    Hints(u32),
    Question(String),
    Banner(Banner),
    Message(String),
}

#[derive(Default)]
struct RecordingView {
    calls: Vec<Call>,
}

impl ViewNotifier for RecordingView {
    fn render_tiles(&mut self, board: &Board) {
        self.calls.push(Call::Tiles(board.len()));
    }

    fn render_player(&mut self, icon: &str, coordinate: Point) {
        self.calls.push(Call::Player(icon.to_string(), coordinate));
    }

    fn render_hints(&mut self, remaining: u32) {
        self.calls.push(Call::Hints(remaining));
    }

    fn display_question(&mut self, prompt: &str) {
        self.calls.push(Call::Question(prompt.to_string()));
    }

    fn display_banner(&mut self, banner: Banner) {
        self.calls.push(Call::Banner(banner));
    }

    fn display_message(&mut self, message: &str) {
        self.calls.push(Call::Message(message.to_string()));
    }
}

/// A view that only implements the required methods.
struct MinimalView;

impl ViewNotifier for MinimalView {
    fn render_tiles(&mut self, _board: &Board) {}
    fn render_player(&mut self, _icon: &str, _coordinate: Point) {}
    fn render_hints(&mut self, _remaining: u32) {}
    fn display_question(&mut self, _prompt: &str) {}
    fn display_banner(&mut self, _banner: Banner) {}
}

#[test]
fn test_refresh_idle_session() {
    let session = Session::with_seed(Board::generate(10).unwrap(), 3, 0);
    let mut view = RecordingView::default();

    refresh(&session, &mut view);

    assert_eq!(
        view.calls,
        vec![
            Call::Tiles(10),
            Call::Player("🍭".to_string(), Point::new(100, 100)),
            Call::Hints(3),
        ]
    );
}

#[test]
fn test_refresh_shows_pending_question() {
    let mut session = Session::with_seed(Board::generate(10).unwrap(), 3, 0);
    let prompt = session.select_question(Difficulty::Easy).unwrap().prompt.clone();
    session.select_character_icon("🧁");
    let mut view = RecordingView::default();

    refresh(&session, &mut view);

    assert_eq!(view.calls.last(), Some(&Call::Question(prompt)));
    assert!(view.calls.contains(&Call::Player("🧁".to_string(), Point::new(100, 100))));
}

#[test]
fn test_announce_incorrect() {
    let mut session = Session::with_seed(Board::generate(10).unwrap(), 3, 0);
    session.select_question(Difficulty::Easy).unwrap();
    let outcome = session.submit_answer("nope").unwrap();
    let mut view = RecordingView::default();

    announce(&session, &outcome, &mut view);

    assert_eq!(view.calls, vec![Call::Banner(Banner::Incorrect)]);
}

#[test]
fn test_announce_correct_moves_player() {
    let mut session = Session::with_seed(Board::generate(10).unwrap(), 3, 0);
    let answer = session.select_question(Difficulty::Medium).unwrap().canonical_answer.clone();
    let outcome = session.submit_answer(&answer).unwrap();
    let mut view = RecordingView::default();

    announce(&session, &outcome, &mut view);

    assert_eq!(
        view.calls,
        vec![
            Call::Banner(Banner::Correct),
            Call::Player("🍭".to_string(), Point::new(340, 100)),
        ]
    );
}

#[test]
fn test_announce_win() {
    let config = GameConfig::new(3);
    let mut session = Session::from_config(&config, QuizBank::candy_shop(), 0).unwrap();
    let answer = session.select_question(Difficulty::Advanced).unwrap().canonical_answer.clone();
    let outcome = session.submit_answer(&answer).unwrap();
    let mut view = RecordingView::default();

    announce(&session, &outcome, &mut view);

    assert_eq!(
        view.calls,
        vec![
            Call::Banner(Banner::Correct),
            Call::Player("🍭".to_string(), Point::new(340, 100)),
            Call::Banner(Banner::Won),
        ]
    );
}

#[test]
fn test_caller_routes_hints_and_errors_to_messages() {
    let mut session = Session::with_seed(Board::generate(10).unwrap(), 1, 0);
    let mut view = RecordingView::default();

    match session.take_hint() {
        Ok(hint) => view.display_message(&hint),
        Err(err) if err.is_user_facing() => view.display_message(&err.to_string()),
        Err(err) => panic!("unexpected error: {err}"),
    }
    session.select_question(Difficulty::Easy).unwrap();
    let hint = session.take_hint().unwrap();
    view.display_message(&hint);
    view.render_hints(session.hints().remaining());

    assert_eq!(
        view.calls,
        vec![
            Call::Message("no active question".to_string()),
            Call::Message(hint),
            Call::Hints(0),
        ]
    );
}

#[test]
fn test_default_message_handler_is_noop() {
    let session = Session::with_seed(Board::generate(4).unwrap(), 3, 0);
    let mut view = MinimalView;

    view.display_message("ignored");
    refresh(&session, &mut view);
}
