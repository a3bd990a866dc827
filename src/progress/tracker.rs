//! Player position along the board.

use serde::{Deserialize, Serialize};

use crate::core::{QuestError, Result};

/// Current tile index, always within `0..board_size`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Progress {
    position: usize,
}

impl Progress {
    /// Progress at the Start tile.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Move forward by `delta`, clamped to the last tile.
    ///
    /// Returns the new progress and whether it sits on the last tile.
    /// Fails if `delta` is not positive or the board is empty.
    pub fn advance(self, delta: i64, board_size: usize) -> Result<(Progress, bool)> {
        if delta <= 0 {
            return Err(QuestError::InvalidArgument(format!(
                "advance delta must be positive, got {delta}"
            )));
        }
        if board_size == 0 {
            return Err(QuestError::InvalidArgument(
                "cannot advance on an empty board".to_string(),
            ));
        }

        let last = board_size - 1;
        let step = usize::try_from(delta).unwrap_or(usize::MAX);
        let position = self.position.saturating_add(step).min(last);

        Ok((Progress { position }, position == last))
    }

    /// Back to the Start tile.
    #[must_use]
    pub const fn reset(self) -> Progress {
        Progress::new()
    }

    /// True when on the last tile of a board of `board_size` tiles.
    #[must_use]
    pub fn is_at_end(self, board_size: usize) -> bool {
        board_size > 0 && self.position == board_size - 1
    }
}
