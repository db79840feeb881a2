//! Heuristic evaluation function for Connect-4 positions
//!
//! Scores a position from one player's point of view as
//! `score(Red) - score(Yellow)`, negated for Yellow. Each side's score sums:
//! - vertical runs that still have an empty cell above them
//! - horizontal and diagonal runs with the reachable empty cells around them
//! - a centre-weighted bonus for pieces with no friendly neighbour

use crate::board::{Board, Piece, NB_COL, NB_ROW};
use crate::game::GameState;
use crate::rules::WIN_LENGTH;

use super::patterns::{run_score, PatternScore, COLUMN_BONUS};

/// Line directions scanned for horizontal and diagonal runs
const LINE_DIRECTIONS: [(i32, i32); 3] = [
    (1, 0),  // Horizontal
    (1, 1),  // Diagonal "\"
    (-1, 1), // Diagonal "/"
];

/// Longest possible line on a 7x6 board
const MAX_LINE: usize = NB_COL;

/// Evaluate a state from the perspective of `perspective`.
///
/// Terminal states short-circuit: a draw is 0, a win for `perspective` is
/// `PatternScore::WIN` and a loss `PatternScore::LOSS`.
#[must_use]
pub fn evaluate(state: &GameState, perspective: Piece) -> i32 {
    if state.is_over() {
        return match state.winner_mark() {
            None => 0,
            Some(mark) if mark == perspective => PatternScore::WIN,
            Some(_) => PatternScore::LOSS,
        };
    }
    heuristic(state.board(), perspective)
}

/// Positional score of a non-terminal board for `perspective`
#[must_use]
pub fn heuristic(board: &Board, perspective: Piece) -> i32 {
    let red = player_score(board, Piece::Red);
    let yellow = player_score(board, Piece::Yellow);
    let diff = red.saturating_sub(yellow);
    if perspective == Piece::Yellow {
        diff.saturating_neg()
    } else {
        diff
    }
}

/// Sum of all run and position credits for one mark
pub fn player_score(board: &Board, mark: Piece) -> i32 {
    vertical_score(board, mark)
        .saturating_add(isolated_score(board, mark))
        .saturating_add(line_score(board, mark))
}

/// Scan each column bottom-up. The run below the first empty cell is
/// credited with one open cell; full columns credit nothing.
fn vertical_score(board: &Board, mark: Piece) -> i32 {
    let mut score = 0i32;
    for col in 0..NB_COL {
        let mut run = 0;
        for row in (0..NB_ROW).rev() {
            match board.at(col, row) {
                p if p == mark => run += 1,
                Piece::Empty => {
                    score = score.saturating_add(run_score(run, 1));
                    break;
                }
                _ => run = 0,
            }
        }
    }
    score
}

/// Centre-weighted bonus for pieces with no same-colour neighbour
fn isolated_score(board: &Board, mark: Piece) -> i32 {
    let mut score = 0;
    for col in 0..NB_COL {
        for row in 0..NB_ROW {
            if board.at(col, row) == mark && !has_friendly_neighbour(board, col, row, mark) {
                score += COLUMN_BONUS[col];
            }
        }
    }
    score
}

fn has_friendly_neighbour(board: &Board, col: usize, row: usize, mark: Piece) -> bool {
    let (c, r) = (col as i32, row as i32);
    for dc in -1..=1 {
        for dr in -1..=1 {
            if (dc, dr) != (0, 0) && board.probe(c + dc, r + dr) == Some(mark) {
                return true;
            }
        }
    }
    false
}

/// An empty cell over an empty cell cannot be played yet
#[inline]
fn reachable(board: &Board, col: usize, row: usize) -> Piece {
    let piece = board.at(col, row);
    if piece == Piece::Empty && row + 1 < NB_ROW && board.at(col, row + 1) == Piece::Empty {
        Piece::Unavailable
    } else {
        piece
    }
}

/// Scan every row and every diagonal long enough to hold four
fn line_score(board: &Board, mark: Piece) -> i32 {
    let mut score = 0i32;
    let mut buf = [Piece::Empty; MAX_LINE];

    for &(dc, dr) in &LINE_DIRECTIONS {
        for col in 0..NB_COL as i32 {
            for row in 0..NB_ROW as i32 {
                // Only start from the first cell of each line
                if Board::is_valid(col - dc, row - dr) {
                    continue;
                }
                let mut len = 0;
                let (mut c, mut r) = (col, row);
                while Board::is_valid(c, r) {
                    buf[len] = reachable(board, c as usize, r as usize);
                    len += 1;
                    c += dc;
                    r += dr;
                }
                if len >= WIN_LENGTH {
                    score = score.saturating_add(scan_line(&buf[..len], mark));
                }
            }
        }
    }
    score
}

/// Credit each run of `mark` with the empty cells touching it on both sides.
///
/// Opponent pieces and unreachable cells stop the count. An empty cell
/// between two runs counts for both.
fn scan_line(cells: &[Piece], mark: Piece) -> i32 {
    let mut score = 0i32;
    let mut empties_before = 0;
    let mut i = 0;

    while i < cells.len() {
        match cells[i] {
            p if p == mark => {
                let start = i;
                while i < cells.len() && cells[i] == mark {
                    i += 1;
                }
                let empties_after = cells[i..]
                    .iter()
                    .take_while(|&&p| p == Piece::Empty)
                    .count();
                score = score.saturating_add(run_score(i - start, empties_before + empties_after));
                empties_before = 0;
            }
            Piece::Empty => {
                empties_before += 1;
                i += 1;
            }
            _ => {
                empties_before = 0;
                i += 1;
            }
        }
    }
    score
}
