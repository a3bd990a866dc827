//! Session state machine.
//!
//! A `Session` aggregates progress, hint budget and the pending question
//! for one player. Phases:
//!
//! - `Idle`: no question pending
//! - `AwaitingAnswer`: a question is pending; wrong answers keep it pending
//! - `Completed`: the castle was reached; position is clamped from here on

#[allow(clippy::module_inception)]
mod session;
pub mod state;

pub use session::{Session, DEFAULT_CHARACTER_ICON};
pub use state::{AnswerReveal, SessionPhase, SessionStatus, SubmitOutcome, ANSWER_EXPLANATION};
