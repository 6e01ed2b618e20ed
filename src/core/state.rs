//! Aggregate game state and move records.
//!
//! ## GameState
//!
//! The single source of truth for one session: board, budgets, turn
//! state, variant bookkeeping (positions, cooldown locks), and the move
//! history. Owned by the engine and mutated only through it; callers
//! receive it as a read-only snapshot for rendering.
//!
//! ## MoveRecord
//!
//! Every applied move is recorded with its per-cell changes, enough to
//! replay a game from the initial position or debug a session.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, CellState};
use super::config::EngineConfig;
use super::player::{PerPlayer, Player};

/// A single cell transition produced by an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub index: usize,
    pub from: CellState,
    pub to: CellState,
}

/// What one applied move did.
///
/// Only cells that actually changed are listed; a legal move always
/// changes at least one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// Center cell of the cross.
    pub center: usize,

    /// Cell transitions, in cross order.
    pub changes: SmallVec<[CellChange; 5]>,

    /// 1-based position of this move in the game.
    pub move_number: u32,
}

/// Complete state of one game session.
///
/// Lifecycle: created at reset, mutated only by the engine's move
/// application, frozen once `over` is true until the next reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board grid.
    pub board: Board,

    /// Remaining move budget per player.
    pub budgets: PerPlayer<u32>,

    /// Current board position per player. `None` unless the movement
    /// variant is enabled.
    pub positions: PerPlayer<Option<usize>>,

    /// Whose turn it is.
    pub active_player: Player,

    /// Cells each player is forbidden from centering a move on, set by
    /// their own previous move. Always empty unless the cooldown variant
    /// is enabled.
    pub cooldown: PerPlayer<FxHashSet<usize>>,

    /// Whether the game has ended. Absorbing until reset.
    pub over: bool,

    /// Applied moves, oldest first.
    pub history: Vec<MoveRecord>,
}

impl GameState {
    /// Fresh state for the given configuration: empty board, full
    /// budgets, Player A to move, no locks.
    ///
    /// In the movement variant the players start at opposite corners:
    /// A at index 0, B at the last cell.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let positions = if config.movement_range.is_some() {
            PerPlayer::new(|p| match p {
                Player::A => Some(0),
                Player::B => Some(config.cell_count() - 1),
            })
        } else {
            PerPlayer::with_value(None)
        };

        Self {
            board: Board::new(config.board_size),
            budgets: PerPlayer::with_value(config.starting_budget),
            positions,
            active_player: Player::A,
            cooldown: PerPlayer::with_default(),
            over: false,
            history: Vec::new(),
        }
    }

    /// Owned-cell counts as (A, B). Weakened cells count for nobody.
    #[must_use]
    pub fn scores(&self) -> (usize, usize) {
        (
            self.board.owned_count(Player::A),
            self.board.owned_count(Player::B),
        )
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// The most recent applied move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}
