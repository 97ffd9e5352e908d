//! Win-condition evaluation.
//!
//! All checks here are pure functions of a board and a mission, so
//! drivers can probe hypothetical positions (hints, analysis) without a
//! game state. [`is_victory`] is the entry point; the engine calls it
//! for every player's mission after each applied move.
//!
//! A line containing any unset cell never satisfies a line mission.
//! Board-wide missions count occupied cells only.

use smallvec::SmallVec;

use crate::board::Board;
use crate::missions::{Mission, PatternKind, TargetShape};

/// How many matching cells an all-cells mission requires.
pub const ALL_CELLS_THRESHOLD: usize = 4;

/// Primality test for cell values.
///
/// Values below 2 (including all negatives) are not prime.
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Check one line against a mission's pattern.
///
/// The mission's target shape is ignored here; callers pick which lines
/// to test. Any unset cell fails the line outright.
///
/// ## Example
///
/// ```
/// use magic_square::missions::{Mission, MissionId, PatternKind, TargetShape};
/// use magic_square::rules::satisfies_line;
///
/// let sum_11 = Mission::new(MissionId::new(0), PatternKind::Sum, TargetShape::Row, 11, "sum 11");
///
/// assert!(satisfies_line(&[Some(5), Some(5), Some(1)], &sum_11));
/// assert!(!satisfies_line(&[Some(5), Some(5), None], &sum_11));
/// ```
#[must_use]
pub fn satisfies_line(line: &[Option<i64>], mission: &Mission) -> bool {
    let values = match line.iter().copied().collect::<Option<SmallVec<[i64; 8]>>>() {
        Some(values) => values,
        None => return false,
    };

    match mission.pattern {
        PatternKind::Sum => values.iter().sum::<i64>() == mission.parameter,
        PatternKind::Multiple => {
            mission.parameter != 0 && values.iter().all(|v| v % mission.parameter == 0)
        }
        PatternKind::Arithmetic => {
            // A line shorter than two cells has no difference to pin down.
            if values.len() < 2 {
                return mission.parameter == 0;
            }
            let step = values[1] - values[0];
            let consistent = values.windows(2).all(|w| w[1] - w[0] == step);
            consistent && (mission.parameter == 0 || step.abs() == mission.parameter)
        }
        PatternKind::Geometric => {
            if values.contains(&0) {
                return false;
            }
            if values.len() < 2 {
                return mission.parameter == 0;
            }
            // Exact ratio comparison; the reciprocal also counts, so a
            // descending line can match an ascending ratio.
            let ratio = values[1] as f64 / values[0] as f64;
            let consistent = values.windows(2).all(|w| w[1] as f64 / w[0] as f64 == ratio);
            if !consistent {
                return false;
            }
            let target = mission.parameter as f64;
            mission.parameter == 0 || ratio == target || ratio.recip() == target
        }
        PatternKind::Prime => values.iter().all(|&v| is_prime(v)),
    }
}

/// Check a board-wide (all-cells) mission: at least `threshold` occupied
/// cells must match the per-cell predicate.
///
/// Only `Multiple` and `Prime` have a per-cell reading; the other
/// patterns never satisfy a board-wide count.
#[must_use]
pub fn satisfies_board(board: &Board, mission: &Mission, threshold: usize) -> bool {
    let matching = match mission.pattern {
        PatternKind::Multiple => {
            if mission.parameter == 0 {
                return false;
            }
            board
                .cells()
                .flatten()
                .filter(|v| v % mission.parameter == 0)
                .count()
        }
        PatternKind::Prime => board.cells().flatten().filter(|&v| is_prime(v)).count(),
        PatternKind::Sum | PatternKind::Arithmetic | PatternKind::Geometric => return false,
    };
    matching >= threshold
}

/// Check whether the board satisfies a mission.
///
/// Dispatches on the mission's target shape: single-shape targets test
/// their lines, `AllDirections` tests every line, and `AllCells` counts
/// matching cells against [`ALL_CELLS_THRESHOLD`].
#[must_use]
pub fn is_victory(board: &Board, mission: &Mission) -> bool {
    match mission.target {
        TargetShape::Row => board.rows().iter().any(|line| satisfies_line(line, mission)),
        TargetShape::Column => board
            .columns()
            .iter()
            .any(|line| satisfies_line(line, mission)),
        TargetShape::Diagonal => board
            .diagonals()
            .iter()
            .any(|line| satisfies_line(line, mission)),
        TargetShape::AllDirections => board
            .all_lines()
            .iter()
            .any(|line| satisfies_line(line, mission)),
        TargetShape::AllCells => satisfies_board(board, mission, ALL_CELLS_THRESHOLD),
    }
}
