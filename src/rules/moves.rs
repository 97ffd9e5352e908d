//! Move validation and application.
//!
//! A move plays one card from the acting player's hand onto a cell,
//! either adding to the cell or taking the (optionally clamped)
//! difference with it. Applying a move re-evaluates every player's
//! mission, replaces the played card with a fresh draw, and advances
//! the turn.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, PlayerId};
use crate::rules::victory::is_victory;

/// How a played card combines with the target cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Add the card's value to the cell.
    Add,
    /// Subtract the card's value from the cell. Under the default rules
    /// the result is clamped to the absolute difference.
    Subtract,
}

impl Operation {
    /// Both operations, in the order move enumeration uses.
    pub const ALL: [Operation; 2] = [Operation::Add, Operation::Subtract];
}

/// A candidate move: play the card at `hand_index` onto cell `(x, y)`.
///
/// Occupied cells are legal targets; the card combines with the value
/// already there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target column.
    pub x: usize,
    /// Target row.
    pub y: usize,
    /// Index into the acting player's hand.
    pub hand_index: usize,
    /// How the card combines with the target cell.
    pub operation: Operation,
}

/// The reason a move was rejected. The state is untouched on rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The acting player is not the player to move.
    NotYourTurn { player: PlayerId, current: PlayerId },
    /// The target cell lies outside the board.
    OutOfBounds { x: usize, y: usize, board_size: usize },
    /// The hand index does not name a card.
    NoSuchHandCard { hand_index: usize, hand_size: usize },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotYourTurn { player, current } => {
                write!(f, "{} tried to move out of turn; it is {}'s turn", player, current)
            }
            IllegalMove::OutOfBounds { x, y, board_size } => {
                write!(
                    f,
                    "Cell ({}, {}) is out of bounds for a {}x{} board",
                    x, y, board_size, board_size
                )
            }
            IllegalMove::NoSuchHandCard { hand_index, hand_size } => {
                write!(
                    f,
                    "Hand index {} is out of range for a hand of {} cards",
                    hand_index, hand_size
                )
            }
        }
    }
}

/// What an applied move produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The value now stored in the target cell.
    pub cell_value: i64,
    /// The players whose missions the new board satisfies, if any.
    pub winners: Option<Vec<PlayerId>>,
}

/// Combine a played card with the current cell value.
///
/// An unset cell takes the card's value regardless of the operation.
/// With `clamp_negative`, subtraction yields the absolute difference.
///
/// ## Example
///
/// ```
/// use magic_square::rules::{compute_cell_result, Operation};
///
/// assert_eq!(compute_cell_result(None, 3, Operation::Subtract, true), 3);
/// assert_eq!(compute_cell_result(Some(5), 3, Operation::Add, true), 8);
/// assert_eq!(compute_cell_result(Some(2), 5, Operation::Subtract, true), 3);
/// assert_eq!(compute_cell_result(Some(2), 5, Operation::Subtract, false), -3);
/// ```
#[must_use]
pub fn compute_cell_result(
    prev: Option<i64>,
    card: i64,
    operation: Operation,
    clamp_negative: bool,
) -> i64 {
    match (prev, operation) {
        (None, _) => card,
        (Some(value), Operation::Add) => value + card,
        (Some(value), Operation::Subtract) => {
            if clamp_negative {
                (value - card).abs()
            } else {
                value - card
            }
        }
    }
}

impl GameState {
    /// Check a move without applying it.
    ///
    /// Checks, in order: that `player` is the player to move, that the
    /// target cell is on the board, and that `hand_index` names a card.
    pub fn validate_move(&self, player: PlayerId, mv: Move) -> Result<(), IllegalMove> {
        if player != self.current_turn {
            return Err(IllegalMove::NotYourTurn {
                player,
                current: self.current_turn,
            });
        }
        let board_size = self.rules.board_size();
        if mv.x >= board_size || mv.y >= board_size {
            return Err(IllegalMove::OutOfBounds {
                x: mv.x,
                y: mv.y,
                board_size,
            });
        }
        let hand_size = self.hands[player].len();
        if mv.hand_index >= hand_size {
            return Err(IllegalMove::NoSuchHandCard {
                hand_index: mv.hand_index,
                hand_size,
            });
        }
        Ok(())
    }

    /// Whether [`validate_move`](Self::validate_move) would accept the move.
    #[must_use]
    pub fn is_valid_move(&self, player: PlayerId, mv: Move) -> bool {
        self.validate_move(player, mv).is_ok()
    }

    /// Apply a move for `player`.
    ///
    /// On success the target cell holds the combined value, the played
    /// card is replaced by a fresh draw, and the turn advances (the
    /// round counter bumps when play wraps back to the first player).
    /// The winner list is recomputed from scratch: it names exactly the
    /// players whose missions the new board satisfies, and is empty
    /// after a move that satisfies none.
    ///
    /// Replacement cards are drawn uniformly from 0..=4 with the result
    /// floored to 1, so 1 shows up twice as often as 2, 3, or 4.
    ///
    /// On rejection the state is untouched.
    pub fn apply_move(&mut self, player: PlayerId, mv: Move) -> Result<MoveOutcome, IllegalMove> {
        if let Err(err) = self.validate_move(player, mv) {
            debug!(player = %player, error = %err, "Rejected move");
            return Err(err);
        }

        let card = self.hands[player][mv.hand_index];
        let prev = self.board.get(mv.x, mv.y);
        let cell_value = compute_cell_result(prev, card, mv.operation, self.rules.clamp_negative());
        self.board.set(mv.x, mv.y, cell_value);

        self.hands[player].remove(mv.hand_index);
        let replacement = self.rng.gen_range(0..5).max(1);
        self.hands[player].push(replacement);

        let winners: Vec<PlayerId> = self
            .missions
            .iter()
            .filter(|(_, mission)| is_victory(&self.board, mission))
            .map(|(id, _)| id)
            .collect();
        self.winners = winners.clone();

        let next = (self.current_turn.index() + 1) % self.player_count();
        self.current_turn = PlayerId::new(next as u8);
        if next == 0 {
            self.round_count += 1;
        }

        debug!(
            player = %player,
            x = mv.x,
            y = mv.y,
            operation = ?mv.operation,
            cell_value,
            winner_count = winners.len(),
            "Applied move"
        );

        Ok(MoveOutcome {
            cell_value,
            winners: if winners.is_empty() { None } else { Some(winners) },
        })
    }

    /// Enumerate every legal move for the player to move.
    ///
    /// Enumeration is cell-major (row by row), then hand order, then
    /// operation, so the list is stable for a given state.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let player = self.current_turn;
        let board_size = self.rules.board_size();
        let hand_size = self.hands[player].len();

        let mut moves =
            Vec::with_capacity(board_size * board_size * hand_size * Operation::ALL.len());
        for y in 0..board_size {
            for x in 0..board_size {
                for hand_index in 0..hand_size {
                    for operation in Operation::ALL {
                        let mv = Move {
                            x,
                            y,
                            hand_index,
                            operation,
                        };
                        if self.is_valid_move(player, mv) {
                            moves.push(mv);
                        }
                    }
                }
            }
        }
        moves
    }
}
