//! Board grid and the cross-shape index helper.
//!
//! The board is a flat row-major sequence of `size * size` cell states,
//! indexed `row * size + col`. Every move touches a bounds-clipped plus
//! shape of 3-5 cells computed by [`cross_indices`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;

/// State of a single board cell.
///
/// A weakened cell is a transitional marker, not ownership: it counts
/// for neither player when scoring until captured or reclaimed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Owned(Player),
    Weakened(Player),
}

impl CellState {
    /// Whether this cell counts toward `player`'s score.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == CellState::Owned(player)
    }
}

/// Indices of the plus shape centered at `center`, clipped to the grid.
///
/// Returns 3-5 in-bounds indices in cross order: center, up, down, left,
/// right. The center is always included; out-of-grid neighbors are never
/// produced. Pure function, independent of cell contents.
#[must_use]
pub fn cross_indices(size: usize, center: usize) -> SmallVec<[usize; 5]> {
    debug_assert!(center < size * size);

    let x = center % size;
    let y = center / size;

    let mut indices = SmallVec::new();
    indices.push(center);
    if y > 0 {
        indices.push(center - size);
    }
    if y + 1 < size {
        indices.push(center + size);
    }
    if x > 0 {
        indices.push(center - 1);
    }
    if x + 1 < size {
        indices.push(center + 1);
    }

    indices
}

/// Manhattan distance between two cell indices on a `size`-wide grid.
#[must_use]
pub fn manhattan(size: usize, a: usize, b: usize) -> usize {
    let (ax, ay) = (a % size, a / size);
    let (bx, by) = (b % size, b / size);
    ax.abs_diff(bx) + ay.abs_diff(by)
}

/// Fixed-size square grid of cell states.
///
/// Invariant: `cells.len() == size * size` for the life of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 2, "Board must be at least 2x2");

        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Grid dimension (the board is `size` x `size`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `index` addresses a cell on this board.
    #[must_use]
    pub fn in_bounds(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Get a cell state. Panics if out of bounds; callers validate first.
    #[must_use]
    pub fn get(&self, index: usize) -> CellState {
        self.cells[index]
    }

    /// Set a cell state. Panics if out of bounds; callers validate first.
    pub fn set(&mut self, index: usize, state: CellState) {
        self.cells[index] = state;
    }

    /// Iterate over all cell states in index order.
    pub fn cells(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells owned by `player`. Weakened cells count for nobody.
    #[must_use]
    pub fn owned_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }
}

impl std::fmt::Display for Board {
    /// Compact grid dump for debugging: `.` empty, `A`/`B` owned,
    /// `a`/`b` weakened.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::Owned(Player::A) => 'A',
                    CellState::Owned(Player::B) => 'B',
                    CellState::Weakened(Player::A) => 'a',
                    CellState::Weakened(Player::B) => 'b',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
