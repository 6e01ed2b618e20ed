//! Game rules: the marking rule and the move/turn engine.

pub mod engine;
pub mod marking;

pub use engine::{compute_winner, MoveRejection, TerritoryEngine, Winner};
pub use marking::mark_cell;
