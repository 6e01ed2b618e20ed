//! Engine configuration and rule-variant selection.
//!
//! The game family exists in several mutually incompatible lineages:
//! with or without a per-player cooldown lock, with or without a movement
//! range, two termination rules, and two weakened-cell reclaim rules.
//! `EngineConfig` selects one concrete combination at construction time;
//! the engine itself never branches on anything else.

use serde::{Deserialize, Serialize};

/// When the game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationRule {
    /// The game ends once both players have spent their full budgets.
    #[default]
    BothExhausted,
    /// The game ends the instant the current mover's budget reaches zero,
    /// even if the opponent still has moves left.
    MoverExhausted,
}

/// Complete rule configuration for one game session.
///
/// ## Example
///
/// ```
/// use territory_engine::core::EngineConfig;
///
/// let config = EngineConfig::new(10, 15)
///     .with_cooldown()
///     .with_movement_range(2);
///
/// assert_eq!(config.board_size, 10);
/// assert!(config.cooldown_enabled);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Grid dimension: the board is `board_size` x `board_size`.
    pub board_size: usize,

    /// Moves each player may make per game.
    pub starting_budget: u32,

    /// Maximum Manhattan distance from the mover's position to the chosen
    /// center. `None` disables the movement variant entirely.
    pub movement_range: Option<usize>,

    /// Lock the cells of an applied move against the mover until their
    /// next turn.
    pub cooldown_enabled: bool,

    /// Allow a player to reclaim their own weakened cells. Off by default:
    /// only cells weakened against the opponent are capturable.
    pub reinforce_own_weakened: bool,

    /// Which lineage's end-of-game rule applies.
    pub termination: TerminationRule,
}

impl Default for EngineConfig {
    /// The common lineage: 10x10 board, 15 moves each, no variant rules.
    fn default() -> Self {
        Self::new(10, 15)
    }
}

impl EngineConfig {
    /// Create a configuration with no variant rules enabled.
    #[must_use]
    pub fn new(board_size: usize, starting_budget: u32) -> Self {
        assert!(board_size >= 2, "Board must be at least 2x2");
        assert!(starting_budget > 0, "Starting budget must be positive");

        Self {
            board_size,
            starting_budget,
            movement_range: None,
            cooldown_enabled: false,
            reinforce_own_weakened: false,
            termination: TerminationRule::default(),
        }
    }

    /// Enable the movement variant with the given range.
    #[must_use]
    pub fn with_movement_range(mut self, range: usize) -> Self {
        assert!(range > 0, "Movement range must be positive");
        self.movement_range = Some(range);
        self
    }

    /// Enable the cooldown variant.
    #[must_use]
    pub fn with_cooldown(mut self) -> Self {
        self.cooldown_enabled = true;
        self
    }

    /// Allow reclaiming one's own weakened cells.
    #[must_use]
    pub fn with_reinforce_own_weakened(mut self) -> Self {
        self.reinforce_own_weakened = true;
        self
    }

    /// Select the termination rule.
    #[must_use]
    pub fn with_termination(mut self, rule: TerminationRule) -> Self {
        self.termination = rule;
        self
    }

    /// Total number of cells on the configured board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }
}
