//! Game configuration.
//!
//! `Rules` captures the handful of knobs a session is started with.
//! It is fixed once a game begins; mid-game state never mutates it.

use serde::{Deserialize, Serialize};

/// Rules for a game session.
///
/// ## Example
///
/// ```
/// use magic_square::core::Rules;
///
/// let rules = Rules::default();
/// assert_eq!(rules.board_size(), 3);
/// assert!(rules.clamp_negative());
///
/// let open = Rules::new(4).allow_negative();
/// assert_eq!(open.board_size(), 4);
/// assert!(!open.clamp_negative());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Side length of the square board.
    board_size: usize,

    /// When true, subtraction yields the absolute difference.
    /// When false, results may go negative.
    clamp_negative: bool,
}

impl Rules {
    /// Create rules for a `board_size` x `board_size` board with
    /// clamped subtraction.
    ///
    /// Panics if `board_size` is zero.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        assert!(board_size >= 1, "Board size must be at least 1");
        Self {
            board_size,
            clamp_negative: true,
        }
    }

    /// Allow subtraction results to go negative.
    #[must_use]
    pub fn allow_negative(mut self) -> Self {
        self.clamp_negative = false;
        self
    }

    /// Side length of the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Whether subtraction is clamped to the absolute difference.
    #[must_use]
    pub fn clamp_negative(&self) -> bool {
        self.clamp_negative
    }
}

impl Default for Rules {
    /// 3x3 board, clamped subtraction.
    fn default() -> Self {
        Self::new(3)
    }
}
