//! # candy-quest
//!
//! Board/progress state machine for a tile-walking SQL quiz: the player
//! token moves toward the castle by answering SQL questions correctly.
//!
//! ## Design Principles
//!
//! 1. **No Global State**: Position, hints and the pending question are
//!    fields of an explicit `Session`. Any number of sessions can coexist.
//!
//! 2. **Configuration Over Variants**: Board size, hint budget, tile layout
//!    and move distance are all set once through `GameConfig`.
//!
//! 3. **Deterministic When Seeded**: Question draws go through an injected
//!    `QuizRng`, so tests and replays are reproducible.
//!
//! 4. **No Rendering**: The core reports state; views implement
//!    `ViewNotifier` and are driven by the caller.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `board`: Tile layout generation
//! - `progress`: Clamped forward movement and win detection
//! - `quiz`: Question bank, selection, grading, candy schema
//! - `hints`: Hint budget and hint text
//! - `session`: The per-player state machine
//! - `view`: Presentation boundary
//!
//! ## Example
//!
//! ```
//! use candy_quest::{Board, Difficulty, Session};
//!
//! let mut session = Session::with_seed(Board::generate(10).unwrap(), 3, 42);
//! let answer = session.select_question(Difficulty::Medium).unwrap().canonical_answer.clone();
//!
//! let outcome = session.submit_answer(&answer).unwrap();
//! assert!(outcome.correct);
//! assert_eq!(outcome.new_position, 2);
//! ```

pub mod core;
pub mod board;
pub mod progress;
pub mod quiz;
pub mod hints;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    DeltaPolicy, GameConfig, Layout,
    QuestError, Result,
    QuizRng, QuizRngState,
};

pub use crate::board::{generate_board, Board, Point, Tile, TileLabel};

pub use crate::progress::Progress;

pub use crate::quiz::{describe_schema, grade_answer, Difficulty, Question, QuizBank};

pub use crate::hints::{derive_hint, HintBudget};

pub use crate::session::{AnswerReveal, Session, SessionPhase, SessionStatus, SubmitOutcome};

pub use crate::view::{announce, refresh, Banner, ViewNotifier};
