//! The single-cell marking rule.
//!
//! Applied independently to every cell of a move's cross, in cross
//! order:
//!
//! - empty cells are claimed by the mover;
//! - the opponent's territory is weakened (the marker keeps the original
//!   owner's identity);
//! - cells already weakened against the opponent are captured;
//! - the mover's own cells, and their own weakened cells under the
//!   strict rule, are untouched.
//!
//! One lineage additionally lets a player reinforce their own weakened
//! cells back into territory; `reinforce_own` selects it.

use crate::core::{CellState, Player};

/// Resulting state of `cell` when `mover` marks it, or `None` if the
/// mark has no effect on this cell.
#[must_use]
pub fn mark_cell(cell: CellState, mover: Player, reinforce_own: bool) -> Option<CellState> {
    let opponent = mover.opponent();

    match cell {
        CellState::Empty => Some(CellState::Owned(mover)),
        CellState::Owned(p) if p == opponent => Some(CellState::Weakened(opponent)),
        CellState::Weakened(p) if p == opponent => Some(CellState::Owned(mover)),
        CellState::Weakened(p) if p == mover && reinforce_own => Some(CellState::Owned(mover)),
        _ => None,
    }
}
