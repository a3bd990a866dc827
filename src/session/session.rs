//! One player's game: board, position, hints and the pending question.
//!
//! ## Flow
//!
//! 1. `select_question` draws a question and moves to `AwaitingAnswer`
//! 2. `submit_answer` grades it; a correct answer advances the player by
//!    the configured delta and returns to `Idle`, a wrong one changes nothing
//! 3. Reaching the last tile moves to `Completed`
//!
//! Selecting while a question is pending replaces it.
//!
//! A `Session` owns all of its state. Callers that share one across threads
//! must serialize access themselves.

use log::{debug, info};

use super::state::{AnswerReveal, SessionPhase, SessionStatus, SubmitOutcome};
use crate::board::{generate_board, Board, Point};
use crate::core::{GameConfig, Layout, QuestError, QuizRng, QuizRngState, Result};
use crate::hints::HintBudget;
use crate::progress::Progress;
use crate::quiz::{grade_answer, Difficulty, Question, QuizBank};

/// Player icon before any selection.
pub const DEFAULT_CHARACTER_ICON: &str = "🍭";

/// In-progress game state for a single player.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    board: Board,
    bank: QuizBank,
    progress: Progress,
    hints: HintBudget,
    active: Option<Question>,
    phase: SessionPhase,
    character_icon: String,
    rng: QuizRng,
}

impl Session {
    /// Start a game on `board` with `hint_max` hints, the built-in candy
    /// bank, the by-difficulty move policy and a random seed.
    #[must_use]
    pub fn new(board: Board, hint_max: u32) -> Self {
        Self::build(board, hint_max, QuizRng::from_random_seed())
    }

    /// Like `new`, with a fixed seed for reproducible question draws.
    #[must_use]
    pub fn with_seed(board: Board, hint_max: u32, seed: u64) -> Self {
        Self::build(board, hint_max, QuizRng::new(seed))
    }

    /// Build a session from a full configuration and question bank.
    ///
    /// Fails with a configuration error if the config or bank is invalid.
    pub fn from_config(config: &GameConfig, bank: QuizBank, seed: u64) -> Result<Self> {
        config.validate()?;
        bank.validate()?;
        let board = generate_board(config.total_spaces, &config.layout)?;
        let phase = starting_phase(&board);

        let session = Self {
            config: config.clone(),
            board,
            bank,
            progress: Progress::new(),
            hints: HintBudget::new(config.hint_max),
            active: None,
            phase,
            character_icon: DEFAULT_CHARACTER_ICON.to_string(),
            rng: QuizRng::new(seed),
        };
        info!(
            "new session: {} tiles, {} hints, seed {}",
            session.board.len(),
            config.hint_max,
            seed
        );
        Ok(session)
    }

    /// The recorded layout is the board's own coordinates as a path table,
    /// so `config()` regenerates exactly this board.
    fn build(board: Board, hint_max: u32, rng: QuizRng) -> Self {
        let path = board.iter().map(|t| t.coordinate).collect();
        let config = GameConfig::new(board.len())
            .with_hint_max(hint_max)
            .with_layout(Layout::Path(path));
        let phase = starting_phase(&board);
        info!(
            "new session: {} tiles, {} hints, seed {}",
            board.len(),
            hint_max,
            rng.seed()
        );
        Self {
            config,
            board,
            bank: QuizBank::candy_shop(),
            progress: Progress::new(),
            hints: HintBudget::new(hint_max),
            active: None,
            phase,
            character_icon: DEFAULT_CHARACTER_ICON.to_string(),
            rng,
        }
    }

    /// Swap in a different question bank.
    #[must_use]
    pub fn with_bank(mut self, bank: QuizBank) -> Self {
        self.bank = bank;
        self
    }

    /// Swap in a different random source.
    #[must_use]
    pub fn with_rng(mut self, rng: QuizRng) -> Self {
        self.rng = rng;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.progress.position()
    }

    /// Coordinate of the tile the player stands on.
    #[must_use]
    pub fn player_coordinate(&self) -> Option<Point> {
        self.board.coordinate(self.progress.position())
    }

    #[must_use]
    pub fn hints(&self) -> HintBudget {
        self.hints
    }

    #[must_use]
    pub fn active_question(&self) -> Option<&Question> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    #[must_use]
    pub fn character_icon(&self) -> &str {
        &self.character_icon
    }

    /// Current RNG state, for replaying the remaining question draws.
    #[must_use]
    pub fn rng_state(&self) -> QuizRngState {
        self.rng.state()
    }

    /// Snapshot of everything the view layer renders.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            position: self.progress.position(),
            board_size: self.board.len(),
            hints_remaining: self.hints.remaining(),
            hint_max: self.hints.max(),
            phase: self.phase,
            character_icon: self.character_icon.clone(),
            active_prompt: self.active.as_ref().map(|q| q.prompt.clone()),
            active_difficulty: self.active.as_ref().map(|q| q.difficulty),
        }
    }

    // === Operations ===

    /// Draw a question and make it the active one.
    ///
    /// Replaces any question already pending.
    pub fn select_question(&mut self, difficulty: Difficulty) -> Result<&Question> {
        let question = self.bank.select(difficulty, &mut self.rng)?.clone();
        if self.phase != SessionPhase::Completed {
            self.phase = SessionPhase::AwaitingAnswer;
        }
        let question: &Question = self.active.insert(question);
        Ok(question)
    }

    /// `select_question` for a difficulty given by name.
    pub fn select_question_named(&mut self, difficulty: &str) -> Result<&Question> {
        let difficulty: Difficulty = difficulty.parse()?;
        self.select_question(difficulty)
    }

    /// Grade `text` against the active question.
    ///
    /// A correct answer advances the player and clears the question. A
    /// wrong one leaves everything as it was so the player can retry.
    pub fn submit_answer(&mut self, text: &str) -> Result<SubmitOutcome> {
        let question = self.active.as_ref().ok_or(QuestError::NoActiveQuestion)?;
        let board_size = self.board.len();

        if !grade_answer(question, text) {
            return Ok(SubmitOutcome {
                correct: false,
                new_position: self.progress.position(),
                reached_end: self.progress.is_at_end(board_size),
            });
        }

        let delta = self.config.delta_policy.delta_for(question.difficulty);
        let (progress, reached_end) = self.progress.advance(delta, board_size)?;
        debug!(
            "correct answer, moved {} -> {}",
            self.progress.position(),
            progress.position()
        );

        self.progress = progress;
        self.active = None;
        if reached_end {
            if self.phase != SessionPhase::Completed {
                info!("player reached the castle at tile {}", progress.position());
            }
            self.phase = SessionPhase::Completed;
        } else {
            self.phase = SessionPhase::Idle;
        }

        Ok(SubmitOutcome {
            correct: true,
            new_position: progress.position(),
            reached_end,
        })
    }

    /// Spend a hint on the active question.
    pub fn take_hint(&mut self) -> Result<String> {
        let (hint, hints) = self.hints.take_hint(self.active.as_ref())?;
        self.hints = hints;
        Ok(hint)
    }

    /// Show the active question's answer. Costs nothing and changes nothing.
    pub fn reveal_answer(&self) -> Result<AnswerReveal> {
        self.active
            .as_ref()
            .map(|q| AnswerReveal::new(q.canonical_answer.as_str()))
            .ok_or(QuestError::NoActiveQuestion)
    }

    /// Back to the Start tile with a full hint budget and no question.
    ///
    /// The character icon and the RNG stream carry over.
    pub fn reset(&mut self) {
        self.progress = self.progress.reset();
        self.hints = self.hints.reset();
        self.active = None;
        self.phase = starting_phase(&self.board);
        info!("session reset");
    }

    /// Record the player's icon. Has no effect on play.
    pub fn select_character_icon(&mut self, icon: impl Into<String>) {
        self.character_icon = icon.into();
        debug!("character icon set to {}", self.character_icon);
    }
}

/// `Completed` when Start is already the last tile, `Idle` otherwise.
fn starting_phase(board: &Board) -> SessionPhase {
    if Progress::new().is_at_end(board.len()) {
        SessionPhase::Completed
    } else {
        SessionPhase::Idle
    }
}
