//! # territory-engine
//!
//! Headless turn/state engine for the two-player territory-claiming
//! board game: a cross-shaped move claims empty cells, weakens opponent
//! territory, and captures cells weakened against the opponent, until
//! both players run out of moves and the larger territory wins.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no rendering, input, sound, or timers. The engine
//!    mutates state and hands back snapshots; visualization is entirely
//!    the caller's concern.
//!
//! 2. **Configuration Over Convention**: the game family's incompatible
//!    rule lineages (cooldown locks, movement range, termination and
//!    reclaim rules) are selected via [`EngineConfig`], never merged into
//!    one "intended" rule set.
//!
//! 3. **Rejections Are Values**: illegal moves return [`MoveRejection`]
//!    and leave the state untouched. No panics, no partial application.
//!
//! ## Modules
//!
//! - `core`: players, board grid, configuration, game state, move records
//! - `rules`: the single-cell marking rule and the move/turn engine
//!
//! ## Example
//!
//! ```
//! use territory_engine::{CellState, EngineConfig, MoveRejection, Player, TerritoryEngine};
//!
//! let mut engine = TerritoryEngine::new(EngineConfig::default());
//!
//! // A claims the cross around row 5, col 5.
//! let record = engine.apply_move(55).unwrap();
//! assert_eq!(record.changes.len(), 5);
//! assert_eq!(engine.state().board.get(55), CellState::Owned(Player::A));
//!
//! // B attacks the same center: A's territory is weakened, not taken.
//! engine.apply_move(55).unwrap();
//! assert_eq!(engine.state().board.get(55), CellState::Weakened(Player::A));
//!
//! // Rejections are values; nothing changed and no turn was consumed.
//! assert_eq!(engine.apply_move(999), Err(MoveRejection::OutOfBounds));
//! assert_eq!(engine.state().active_player, Player::A);
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    cross_indices, manhattan, Board, CellChange, CellState, EngineConfig, GameState, MoveRecord,
    PerPlayer, Player, TerminationRule,
};

pub use crate::rules::{compute_winner, mark_cell, MoveRejection, TerritoryEngine, Winner};
