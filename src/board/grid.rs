//! The square grid of cells.
//!
//! Cells hold `Option<i64>`: `None` until a card is first placed there,
//! `Some(value)` afterwards. Storage is a flat row-major `Vec`, indexed
//! by `(x, y)` where `x` is the column and `y` is the row.

use serde::{Deserialize, Serialize};

/// A square board of optional cell values.
///
/// ## Example
///
/// ```
/// use magic_square::board::Board;
///
/// let mut board = Board::new(3);
/// assert_eq!(board.get(1, 2), None);
///
/// board.set(1, 2, 7);
/// assert_eq!(board.get(1, 2), Some(7));
/// assert_eq!(board.occupied_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<i64>>,
}

impl Board {
    /// Create a board with all cells unset.
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Board size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether `(x, y)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.in_bounds(x, y),
            "Cell ({}, {}) out of bounds for {}x{} board",
            x,
            y,
            self.size,
            self.size
        );
        y * self.size + x
    }

    /// Get the value at `(x, y)`, or `None` if the cell is unset.
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<i64> {
        self.cells[self.index(x, y)]
    }

    /// Set the value at `(x, y)`.
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: i64) {
        let idx = self.index(x, y);
        self.cells[idx] = Some(value);
    }

    /// Reset the cell at `(x, y)` to unset.
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn clear(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = None;
    }

    /// Check whether the cell at `(x, y)` holds a value.
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some()
    }

    /// Number of cells holding a value.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        self.cells.iter().copied()
    }
}
