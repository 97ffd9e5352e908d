//! Line extraction: rows, columns, and the two diagonals.
//!
//! Win conditions are judged against lines, so the board exposes each
//! family of lines as owned snapshots. A `Line` preserves unset cells;
//! the evaluator decides what incompleteness means.

use smallvec::SmallVec;

use super::grid::Board;

/// A snapshot of one line of cells, in board order.
///
/// Rows read left to right, columns top to bottom, diagonals from the
/// top row down.
pub type Line = SmallVec<[Option<i64>; 8]>;

impl Board {
    /// The row at index `y`, left to right.
    ///
    /// Panics if `y` is out of bounds.
    #[must_use]
    pub fn row(&self, y: usize) -> Line {
        (0..self.size()).map(|x| self.get(x, y)).collect()
    }

    /// The column at index `x`, top to bottom.
    ///
    /// Panics if `x` is out of bounds.
    #[must_use]
    pub fn column(&self, x: usize) -> Line {
        (0..self.size()).map(|y| self.get(x, y)).collect()
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<Line> {
        (0..self.size()).map(|y| self.row(y)).collect()
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> Vec<Line> {
        (0..self.size()).map(|x| self.column(x)).collect()
    }

    /// The main diagonal and the anti-diagonal.
    #[must_use]
    pub fn diagonals(&self) -> [Line; 2] {
        let n = self.size();
        let main = (0..n).map(|i| self.get(i, i)).collect();
        let anti = (0..n).map(|i| self.get(n - 1 - i, i)).collect();
        [main, anti]
    }

    /// Every line on the board: rows, then columns, then both diagonals.
    #[must_use]
    pub fn all_lines(&self) -> Vec<Line> {
        let mut lines = self.rows();
        lines.extend(self.columns());
        lines.extend(self.diagonals());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged_board() -> Board {
        // 1 2 3
        // 4 . 6
        // 7 8 9
        let mut board = Board::new(3);
        board.set(0, 0, 1);
        board.set(1, 0, 2);
        board.set(2, 0, 3);
        board.set(0, 1, 4);
        board.set(2, 1, 6);
        board.set(0, 2, 7);
        board.set(1, 2, 8);
        board.set(2, 2, 9);
        board
    }

    #[test]
    fn test_rows() {
        let board = staged_board();
        let rows = board.rows();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_slice(), &[Some(1), Some(2), Some(3)]);
        assert_eq!(rows[1].as_slice(), &[Some(4), None, Some(6)]);
        assert_eq!(rows[2].as_slice(), &[Some(7), Some(8), Some(9)]);
    }

    #[test]
    fn test_columns() {
        let board = staged_board();
        let columns = board.columns();

        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].as_slice(), &[Some(1), Some(4), Some(7)]);
        assert_eq!(columns[1].as_slice(), &[Some(2), None, Some(8)]);
        assert_eq!(columns[2].as_slice(), &[Some(3), Some(6), Some(9)]);
    }

    #[test]
    fn test_diagonals() {
        let board = staged_board();
        let [main, anti] = board.diagonals();

        assert_eq!(main.as_slice(), &[Some(1), None, Some(9)]);
        assert_eq!(anti.as_slice(), &[Some(3), None, Some(7)]);
    }

    #[test]
    fn test_all_lines_count_and_order() {
        let board = staged_board();
        let lines = board.all_lines();

        // n rows + n columns + 2 diagonals
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], board.row(0));
        assert_eq!(lines[3], board.column(0));
        assert_eq!(lines[6], board.diagonals()[0]);
        assert_eq!(lines[7], board.diagonals()[1]);
    }

    #[test]
    fn test_single_cell_board_lines() {
        let mut board = Board::new(1);
        board.set(0, 0, 5);

        let lines = board.all_lines();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.as_slice(), &[Some(5)]);
        }
    }
}
