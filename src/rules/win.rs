//! Win detection for Connect-4
//!
//! A move wins when it completes 4 consecutive marks along one of the four
//! directions through the placed cell. Only the windows through that cell are
//! scanned, never the whole board.

use crate::board::{Board, Piece};

/// Run length needed to win
pub const WIN_LENGTH: usize = 4;

/// Half-width of the window centred on the placed cell
const REACH: i32 = WIN_LENGTH as i32 - 1;

/// Direction vectors as (dcol, drow), row 0 at the top
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal "\"
    (-1, 1), // Diagonal "/"
];

/// Collect the window of up to 7 cells centred on `(col, row)` along a
/// direction. Off-board cells are dropped, not padded.
pub fn window(board: &Board, col: i32, row: i32, (dc, dr): (i32, i32)) -> Vec<Piece> {
    (-REACH..=REACH)
        .filter_map(|i| board.probe(col + dc * i, row + dr * i))
        .collect()
}

/// The four directional windows through `(col, row)`
pub fn directional_windows(board: &Board, col: i32, row: i32) -> [Vec<Piece>; 4] {
    DIRECTIONS.map(|dir| window(board, col, row, dir))
}

/// Check whether a window holds `WIN_LENGTH` consecutive `mark` cells.
/// Any other cell resets the count.
pub fn has_run(window: &[Piece], mark: Piece) -> bool {
    let mut count = 0;
    for &cell in window {
        if cell == mark {
            count += 1;
            if count == WIN_LENGTH {
                return true;
            }
        } else {
            count = 0;
        }
    }
    false
}

/// Check for a 4-in-a-row of `mark` passing through `(col, row)`.
///
/// Called right after `mark` was placed at `(col, row)`.
#[inline]
pub fn check_win_at(board: &Board, col: i32, row: i32, mark: Piece) -> bool {
    if !mark.is_mark() {
        return false;
    }
    directional_windows(board, col, row)
        .iter()
        .any(|w| has_run(w, mark))
}
