//! Score table for Connect-4 evaluation
//!
//! Maps a run of same-colour pieces and its reachable open cells to a score.

use crate::board::NB_COL;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Decided game, or a threat the opponent cannot stop
    pub const WIN: i32 = i32::MAX;
    /// Decided loss
    pub const LOSS: i32 = i32::MIN;
    /// Three in a row with exactly one reachable open cell
    pub const THREE_ONE_OPEN: i32 = 900_000;
    /// Two in a row, indexed by reachable open cells (0..=5)
    pub const TWO: [i32; 6] = [0, 5_000, 10_000, 20_000, 30_000, 40_000];
}

/// Bonus for an isolated piece, higher toward the centre column
pub const COLUMN_BONUS: [i32; NB_COL] = [40, 70, 120, 200, 120, 70, 40];

/// Score a run of `length` pieces with `open` reachable empty cells around it.
///
/// A three with two open cells is scored as a forced win even though some
/// geometries still let the opponent block.
pub fn run_score(length: usize, open: usize) -> i32 {
    match length {
        0 | 1 => 0,
        2 => PatternScore::TWO.get(open).copied().unwrap_or(0),
        3 => match open {
            1 => PatternScore::THREE_ONE_OPEN,
            2 => PatternScore::WIN,
            _ => 0,
        },
        _ => PatternScore::WIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_runs_score_nothing() {
        for open in 0..6 {
            assert_eq!(run_score(0, open), 0);
            assert_eq!(run_score(1, open), 0);
        }
    }

    #[test]
    fn test_two_table() {
        assert_eq!(run_score(2, 0), 0);
        assert_eq!(run_score(2, 1), 5_000);
        assert_eq!(run_score(2, 2), 10_000);
        assert_eq!(run_score(2, 3), 20_000);
        assert_eq!(run_score(2, 4), 30_000);
        assert_eq!(run_score(2, 5), 40_000);
        assert_eq!(run_score(2, 6), 0);
    }

    #[test]
    fn test_three_table() {
        assert_eq!(run_score(3, 0), 0);
        assert_eq!(run_score(3, 1), 900_000);
        assert_eq!(run_score(3, 2), i32::MAX);
        assert_eq!(run_score(3, 3), 0);
    }

    #[test]
    fn test_four_or_more_is_win() {
        assert_eq!(run_score(4, 0), PatternScore::WIN);
        assert_eq!(run_score(5, 2), PatternScore::WIN);
    }

    #[test]
    fn test_column_bonus_is_symmetric() {
        for col in 0..NB_COL {
            assert_eq!(COLUMN_BONUS[col], COLUMN_BONUS[NB_COL - 1 - col]);
        }
        assert_eq!(COLUMN_BONUS[3], 200);
    }
}
