//! Game configuration types.
//!
//! Sessions are configured once at construction by providing:
//! - `Layout`: Where tiles sit (grid formula or a winding path table)
//! - `DeltaPolicy`: How far a correct answer moves the player
//! - `GameConfig`: Combines board size, hint budget, layout and policy
//!
//! Nothing here changes after a session is built.

use log::warn;
use serde::{Deserialize, Serialize};

use super::error::{QuestError, Result};
use crate::board::Point;
use crate::quiz::Difficulty;

/// Board size used by the default configuration.
pub const DEFAULT_TOTAL_SPACES: usize = 10;

/// Hints granted per game by the default configuration.
pub const DEFAULT_HINT_MAX: u32 = 3;

/// Tile placement strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Row-major grid: `columns` tiles per row starting at `origin`.
    Grid {
        origin: Point,
        columns: usize,
        spacing_x: i32,
        spacing_y: i32,
    },
    /// Explicit coordinates, one per tile. May hold more entries than tiles.
    Path(Vec<Point>),
}

impl Layout {
    /// Five-column grid at (100, 100) with 120px spacing.
    #[must_use]
    pub const fn default_grid() -> Self {
        Layout::Grid {
            origin: Point::new(100, 100),
            columns: 5,
            spacing_x: 120,
            spacing_y: 120,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::default_grid()
    }
}

/// Distance a correct answer moves the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaPolicy {
    /// Same distance regardless of difficulty.
    Fixed(i64),
    /// Harder questions move further.
    ByDifficulty { easy: i64, medium: i64, advanced: i64 },
}

impl DeltaPolicy {
    /// easy=1, medium=2, advanced=3.
    #[must_use]
    pub const fn by_difficulty() -> Self {
        DeltaPolicy::ByDifficulty {
            easy: 1,
            medium: 2,
            advanced: 3,
        }
    }

    /// Move distance for a question of the given difficulty.
    #[must_use]
    pub fn delta_for(&self, difficulty: Difficulty) -> i64 {
        match *self {
            DeltaPolicy::Fixed(delta) => delta,
            DeltaPolicy::ByDifficulty { easy, medium, advanced } => match difficulty {
                Difficulty::Easy => easy,
                Difficulty::Medium => medium,
                Difficulty::Advanced => advanced,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        let all_positive = Difficulty::ALL.iter().all(|&d| self.delta_for(d) > 0);
        if all_positive {
            Ok(())
        } else {
            Err(QuestError::Configuration(format!(
                "delta policy must move forward for every difficulty: {self:?}"
            )))
        }
    }
}

impl Default for DeltaPolicy {
    fn default() -> Self {
        Self::by_difficulty()
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tiles, including Start and the castle.
    pub total_spaces: usize,

    /// Hints available per game.
    pub hint_max: u32,

    pub layout: Layout,

    pub delta_policy: DeltaPolicy,
}

impl GameConfig {
    /// Create a configuration with the given board size and default settings.
    #[must_use]
    pub fn new(total_spaces: usize) -> Self {
        Self {
            total_spaces,
            ..Self::default()
        }
    }

    /// Set the hint budget.
    #[must_use]
    pub fn with_hint_max(mut self, hint_max: u32) -> Self {
        self.hint_max = hint_max;
        self
    }

    /// Set the tile layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the move policy.
    #[must_use]
    pub fn with_delta_policy(mut self, delta_policy: DeltaPolicy) -> Self {
        self.delta_policy = delta_policy;
        self
    }

    /// Check the configuration without building a board.
    ///
    /// Layout problems are caught here as well as in `generate_board`,
    /// so a bad config fails before any session exists.
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!("rejected game config: {err}");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.total_spaces == 0 {
            return Err(QuestError::Configuration(
                "board needs at least one tile".to_string(),
            ));
        }

        match &self.layout {
            Layout::Grid { columns: 0, .. } => {
                return Err(QuestError::Configuration(
                    "grid layout needs at least one column".to_string(),
                ));
            }
            Layout::Path(table) if table.len() < self.total_spaces => {
                return Err(QuestError::Configuration(format!(
                    "path table has {} entries but the board has {} tiles",
                    table.len(),
                    self.total_spaces
                )));
            }
            _ => {}
        }

        self.delta_policy.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_spaces: DEFAULT_TOTAL_SPACES,
            hint_max: DEFAULT_HINT_MAX,
            layout: Layout::default_grid(),
            delta_policy: DeltaPolicy::by_difficulty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.total_spaces, 10);
        assert_eq!(config.hint_max, 3);
        assert_eq!(config.layout, Layout::default_grid());
        assert_eq!(config.delta_policy, DeltaPolicy::by_difficulty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(17)
            .with_hint_max(5)
            .with_delta_policy(DeltaPolicy::Fixed(1));

        assert_eq!(config.total_spaces, 17);
        assert_eq!(config.hint_max, 5);
        assert_eq!(config.delta_policy, DeltaPolicy::Fixed(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_delta_for() {
        let policy = DeltaPolicy::by_difficulty();
        assert_eq!(policy.delta_for(Difficulty::Easy), 1);
        assert_eq!(policy.delta_for(Difficulty::Medium), 2);
        assert_eq!(policy.delta_for(Difficulty::Advanced), 3);

        let fixed = DeltaPolicy::Fixed(1);
        for d in Difficulty::ALL {
            assert_eq!(fixed.delta_for(d), 1);
        }
    }

    #[test]
    fn test_zero_spaces_rejected() {
        let err = GameConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, QuestError::Configuration(_)));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let config = GameConfig::new(10).with_layout(Layout::Grid {
            origin: Point::new(0, 0),
            columns: 0,
            spacing_x: 10,
            spacing_y: 10,
        });
        assert!(matches!(config.validate(), Err(QuestError::Configuration(_))));
    }

    #[test]
    fn test_short_path_rejected() {
        let table = vec![Point::new(0, 0), Point::new(1, 0)];
        let config = GameConfig::new(3).with_layout(Layout::Path(table));
        assert!(matches!(config.validate(), Err(QuestError::Configuration(_))));
    }

    #[test]
    fn test_non_positive_delta_rejected() {
        let config = GameConfig::default().with_delta_policy(DeltaPolicy::ByDifficulty {
            easy: 1,
            medium: 0,
            advanced: 3,
        });
        assert!(matches!(config.validate(), Err(QuestError::Configuration(_))));

        let config = GameConfig::default().with_delta_policy(DeltaPolicy::Fixed(-1));
        assert!(matches!(config.validate(), Err(QuestError::Configuration(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(4).with_layout(Layout::Path(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ]));

        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
