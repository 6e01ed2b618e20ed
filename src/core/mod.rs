//! Core engine types: players, board, state, configuration.
//!
//! These are the building blocks the rules layer drives. Rule variants
//! are selected via `EngineConfig` rather than hardcoded here.

pub mod board;
pub mod config;
pub mod player;
pub mod state;

pub use board::{cross_indices, manhattan, Board, CellState};
pub use config::{EngineConfig, TerminationRule};
pub use player::{PerPlayer, Player};
pub use state::{CellChange, GameState, MoveRecord};
