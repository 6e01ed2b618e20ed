//! The territory engine: move legality, cross application, and the
//! win condition.
//!
//! The engine owns one `GameState` and exposes exactly two operations on
//! it: apply a move, and reset. Every call is synchronous and O(board
//! size); rendering, input, sound, and timers live with the caller, which
//! consumes the state snapshot after each call.
//!
//! Rejected moves are ordinary values, never panics, and leave the state
//! untouched. Legality is checked in a fixed order (game over, bounds,
//! cooldown, movement range) before any cell is written; a cross that
//! changes no cell is itself illegal and consumes no turn.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    cross_indices, manhattan, CellChange, EngineConfig, GameState, MoveRecord, Player,
    TerminationRule,
};
use crate::rules::marking::mark_cell;

/// Why a move was rejected. The state is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Center index is outside the board.
    OutOfBounds,
    /// The game has already ended; only a reset accepts input again.
    GameAlreadyOver,
    /// The center cell is locked by the mover's own previous move.
    CellOnCooldown,
    /// The center is farther from the mover's position than the
    /// configured movement range.
    OutOfMoveRange,
    /// The cross touched no cell that could change state.
    NoEffect,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            MoveRejection::OutOfBounds => "center cell is out of bounds",
            MoveRejection::GameAlreadyOver => "the game is already over",
            MoveRejection::CellOnCooldown => "center cell is on cooldown",
            MoveRejection::OutOfMoveRange => "center cell is out of movement range",
            MoveRejection::NoEffect => "move would change no cell",
        };
        write!(f, "{}", reason)
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// One player holds strictly more cells.
    Player(Player),
    /// Exact tie.
    Draw,
}

impl Winner {
    /// Check whether `player` won.
    #[must_use]
    pub fn is_player(self, player: Player) -> bool {
        self == Winner::Player(player)
    }
}

/// Count owned cells and declare the winner.
///
/// Pure function of the board: weakened cells count for neither player,
/// strictly more cells wins, a tie is a draw. Only meaningful once the
/// game is over, but callable at any time (e.g. for a live score display).
#[must_use]
pub fn compute_winner(state: &GameState) -> Winner {
    let (a, b) = state.scores();

    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Winner::Player(Player::A),
        std::cmp::Ordering::Less => Winner::Player(Player::B),
        std::cmp::Ordering::Equal => Winner::Draw,
    }
}

/// Turn/state engine for one game session.
///
/// ## Example
///
/// ```
/// use territory_engine::{EngineConfig, Player, TerritoryEngine};
///
/// let mut engine = TerritoryEngine::new(EngineConfig::default());
///
/// let record = engine.apply_move(55).unwrap();
/// assert_eq!(record.player, Player::A);
/// assert_eq!(engine.state().budgets[Player::A], 14);
/// assert_eq!(engine.state().active_player, Player::B);
/// ```
#[derive(Clone, Debug)]
pub struct TerritoryEngine {
    config: EngineConfig,
    state: GameState,
}

impl TerritoryEngine {
    /// Create an engine with a fresh state for `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        debug!(
            "new game: {}x{} board, budget {}, cooldown {}, range {:?}",
            config.board_size,
            config.board_size,
            config.starting_budget,
            config.cooldown_enabled,
            config.movement_range,
        );

        Self {
            state: GameState::new(&config),
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current state snapshot. Callers render from this and never
    /// mutate it; clone it to keep a copy across moves.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discard the session and start over from the configured initial
    /// state. Always succeeds; the only way out of a finished game.
    pub fn reset(&mut self) {
        debug!("reset after {} moves", self.state.moves_played());
        self.state = GameState::new(&self.config);
    }

    /// Apply a cross-shaped move centered at `center`.
    ///
    /// On success the mover's budget drops by one, variant bookkeeping
    /// (position, cooldown locks) is updated, termination is evaluated
    /// per the configured rule, and the turn flips if the game goes on.
    /// The returned record lists exactly the cells that changed.
    ///
    /// On rejection nothing changes and no turn is consumed.
    pub fn apply_move(&mut self, center: usize) -> Result<MoveRecord, MoveRejection> {
        self.check_legality(center)?;

        let mover = self.state.active_player;
        let size = self.state.board.size();
        let cross = cross_indices(size, center);

        // Each cell is evaluated independently, in cross order; partial
        // effect is normal.
        let mut changes: SmallVec<[CellChange; 5]> = SmallVec::new();
        for &index in &cross {
            let from = self.state.board.get(index);
            if let Some(to) = mark_cell(from, mover, self.config.reinforce_own_weakened) {
                self.state.board.set(index, to);
                changes.push(CellChange { index, from, to });
            }
        }

        // A move must have effect somewhere; nothing was written if the
        // change list is empty.
        if changes.is_empty() {
            return Err(MoveRejection::NoEffect);
        }

        self.state.budgets[mover] -= 1;

        if self.config.movement_range.is_some() {
            self.state.positions[mover] = Some(center);
        }

        if self.config.cooldown_enabled {
            // The new lock replaces the old one, so a lock constrains
            // exactly the mover's next move.
            self.state.cooldown[mover] = cross.iter().copied().collect();
        }

        let record = MoveRecord {
            player: mover,
            center,
            changes,
            move_number: self.state.history.len() as u32 + 1,
        };
        self.state.history.push(record.clone());

        trace!(
            "{} move {} at {}: {} cell(s) changed, budget {}",
            mover,
            record.move_number,
            center,
            record.changes.len(),
            self.state.budgets[mover],
        );

        self.state.over = match self.config.termination {
            TerminationRule::BothExhausted => {
                self.state.budgets[Player::A] == 0 && self.state.budgets[Player::B] == 0
            }
            TerminationRule::MoverExhausted => self.state.budgets[mover] == 0,
        };

        if self.state.over {
            let (a, b) = self.state.scores();
            debug!("game over after {} moves: A {} - B {}", record.move_number, a, b);
        } else {
            self.state.active_player = mover.opponent();
        }

        Ok(record)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Winner by cell count. See [`compute_winner`].
    #[must_use]
    pub fn compute_winner(&self) -> Winner {
        compute_winner(&self.state)
    }

    /// Legality checks that run before any cell is written.
    fn check_legality(&self, center: usize) -> Result<(), MoveRejection> {
        if self.state.over {
            return Err(MoveRejection::GameAlreadyOver);
        }
        if !self.state.board.in_bounds(center) {
            return Err(MoveRejection::OutOfBounds);
        }

        let mover = self.state.active_player;

        if self.config.cooldown_enabled && self.state.cooldown[mover].contains(&center) {
            return Err(MoveRejection::CellOnCooldown);
        }

        if let Some(range) = self.config.movement_range {
            // Positions are always set when the movement variant is on.
            if let Some(position) = self.state.positions[mover] {
                if manhattan(self.state.board.size(), position, center) > range {
                    return Err(MoveRejection::OutOfMoveRange);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    #[test]
    fn test_first_move_claims_cross() {
        let mut engine = TerritoryEngine::new(EngineConfig::default());

        let record = engine.apply_move(55).unwrap();

        assert_eq!(record.player, Player::A);
        assert_eq!(record.center, 55);
        assert_eq!(record.changes.len(), 5);
        for index in [55, 45, 65, 54, 56] {
            assert_eq!(engine.state().board.get(index), CellState::Owned(Player::A));
        }
        assert_eq!(engine.state().budgets[Player::A], 14);
        assert_eq!(engine.state().active_player, Player::B);
    }

    #[test]
    fn test_corner_move_touches_three_cells() {
        let mut engine = TerritoryEngine::new(EngineConfig::default());

        let record = engine.apply_move(0).unwrap();

        assert_eq!(record.changes.len(), 3);
        for index in [0, 10, 1] {
            assert_eq!(engine.state().board.get(index), CellState::Owned(Player::A));
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = TerritoryEngine::new(EngineConfig::default());
        let before = engine.state().clone();

        assert_eq!(engine.apply_move(100), Err(MoveRejection::OutOfBounds));
        assert_eq!(engine.state(), &before);

        // Rejection is idempotent.
        assert_eq!(engine.apply_move(100), Err(MoveRejection::OutOfBounds));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_attack_weakens_then_capture() {
        let mut engine = TerritoryEngine::new(EngineConfig::default());

        // A claims the cross at 55, then B attacks the same center.
        engine.apply_move(55).unwrap();
        let record = engine.apply_move(55).unwrap();

        assert_eq!(record.player, Player::B);
        for index in [55, 45, 65, 54, 56] {
            assert_eq!(
                engine.state().board.get(index),
                CellState::Weakened(Player::A)
            );
        }
        assert_eq!(engine.state().budgets[Player::B], 14);
        assert_eq!(engine.state().active_player, Player::A);

        // Under the strict rule A cannot act on their own weakened cells,
        // but the cross at 35 overlaps 45 only, which stays weakened.
        let record = engine.apply_move(35).unwrap();
        assert_eq!(record.changes.len(), 4);
        assert_eq!(engine.state().board.get(45), CellState::Weakened(Player::A));

        // B captures the weakened center cross outright.
        let record = engine.apply_move(55).unwrap();
        assert_eq!(record.changes.len(), 5);
        for index in [55, 45, 65, 54, 56] {
            assert_eq!(engine.state().board.get(index), CellState::Owned(Player::B));
        }
    }

    #[test]
    fn test_no_effect_rejected_without_consuming_turn() {
        // On a 2x2 board: A claims {0, 1, 2}, B's corner move turns 3
        // into B territory and weakens 1 and 2. A's cross at 0 then
        // covers only A-owned and A-weakened cells, which are all inert
        // under the strict rule.
        let mut engine = TerritoryEngine::new(EngineConfig::new(2, 15));
        engine.apply_move(0).unwrap();
        engine.apply_move(3).unwrap();
        let before = engine.state().clone();

        assert_eq!(engine.apply_move(0), Err(MoveRejection::NoEffect));
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.state().active_player, Player::A);
        assert_eq!(engine.state().budgets[Player::A], 14);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut engine = TerritoryEngine::new(EngineConfig::default());
        engine.apply_move(55).unwrap();
        engine.apply_move(0).unwrap();

        engine.reset();

        assert_eq!(engine.state(), &GameState::new(engine.config()));
    }

    #[test]
    fn test_compute_winner_counts_owned_only() {
        let mut engine = TerritoryEngine::new(EngineConfig::default());

        engine.apply_move(55).unwrap(); // A: 5 cells
        engine.apply_move(0).unwrap(); // B: 3 cells

        assert_eq!(engine.compute_winner(), Winner::Player(Player::A));

        // B weakens A's cross; those five cells now count for nobody.
        engine.apply_move(22).unwrap(); // A: +5 -> 10
        engine.apply_move(55).unwrap(); // A's cross weakened -> A back to 5

        let (a, b) = engine.state().scores();
        assert_eq!(a, 5);
        assert_eq!(b, 3);
        assert_eq!(engine.compute_winner(), Winner::Player(Player::A));
    }

    #[test]
    fn test_winner_is_player() {
        assert!(Winner::Player(Player::A).is_player(Player::A));
        assert!(!Winner::Player(Player::A).is_player(Player::B));
        assert!(!Winner::Draw.is_player(Player::A));
        assert!(!Winner::Draw.is_player(Player::B));
    }

    #[test]
    fn test_move_rejection_display() {
        assert_eq!(
            format!("{}", MoveRejection::CellOnCooldown),
            "center cell is on cooldown"
        );
    }
}
