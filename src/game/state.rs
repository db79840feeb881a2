//! Game state for a Connect-4 session
//!
//! `GameState` is a small value: a `Copy` board, a few flags and a shared
//! handle to the two players. Cloning it gives an independent board, which is
//! what the search engine explores.
//!
//! State machine:
//! - `InProgress -> InProgress` on a non-winning, non-filling move (turn flips)
//! - `InProgress -> Winner` on a move completing four in a row
//! - `InProgress -> Draw` on filling the last cell without a win
//!
//! Terminal states are absorbing.

use std::sync::Arc;

use crate::board::{Board, Piece};
use crate::error::{MoveError, SetupError};
use crate::rules::check_win_at;

use super::Player;

/// Result of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Winner(Piece),
    Draw,
}

/// Board plus turn, players and terminal flags.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Indexed by mark: Red at 0, Yellow at 1
    players: Arc<[Player; 2]>,
    turn: Piece,
    starting: Piece,
    winner: Option<Piece>,
    over: bool,
    last_move: Option<(usize, usize)>,
}

#[inline]
fn seat(mark: Piece) -> usize {
    match mark {
        Piece::Yellow => 1,
        _ => 0,
    }
}

impl GameState {
    /// Start a session on an empty board.
    ///
    /// Players are seated by their marks, in either argument order.
    ///
    /// # Errors
    ///
    /// [`SetupError::DuplicateMark`] when both players hold the same mark.
    pub fn new(first: Player, second: Player, red_starts: bool) -> Result<Self, SetupError> {
        let players = match (first.mark(), second.mark()) {
            (Piece::Red, Piece::Yellow) => [first, second],
            (Piece::Yellow, Piece::Red) => [second, first],
            (a, b) if a == b => return Err(SetupError::DuplicateMark(a)),
            (a, b) => return Err(SetupError::InvalidMark(if a.is_mark() { b } else { a })),
        };
        let starting = if red_starts { Piece::Red } else { Piece::Yellow };
        Ok(Self {
            board: Board::new(),
            players: Arc::new(players),
            turn: starting,
            starting,
            winner: None,
            over: false,
            last_move: None,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark of the player to move
    #[inline]
    pub fn current_mark(&self) -> Piece {
        self.turn
    }

    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[seat(self.turn)]
    }

    /// Player waiting for their turn
    #[inline]
    pub fn opponent(&self) -> &Player {
        &self.players[seat(self.turn.opponent())]
    }

    /// Player holding a mark, `None` for `Empty`/`Unavailable`
    pub fn player(&self, mark: Piece) -> Option<&Player> {
        mark.is_mark().then(|| &self.players[seat(mark)])
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    #[inline]
    pub fn winner_mark(&self) -> Option<Piece> {
        self.winner
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|mark| self.player(mark))
    }

    pub fn outcome(&self) -> Outcome {
        match (self.over, self.winner) {
            (false, _) => Outcome::InProgress,
            (true, Some(mark)) => Outcome::Winner(mark),
            (true, None) => Outcome::Draw,
        }
    }

    #[inline]
    pub fn available_columns(&self) -> Vec<usize> {
        self.board.available_columns()
    }

    /// Cell of the most recent move as (col, row)
    #[inline]
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// True if at least one seat is played by a human
    pub fn has_human_player(&self) -> bool {
        self.players.iter().any(Player::is_human)
    }

    /// Check whether the mover's piece at `(col, row)` completes four in a row
    #[inline]
    pub fn check_win_at(&self, col: usize, row: usize) -> bool {
        check_win_at(&self.board, col as i32, row as i32, self.turn)
    }

    /// Drop the current player's piece into `col`.
    ///
    /// Full or out-of-range columns and finished games leave the state
    /// untouched. Re-read [`GameState::is_over`] afterwards.
    pub fn place_piece(&mut self, col: usize) {
        let _ = self.try_place_piece(col);
    }

    /// Checked variant of [`GameState::place_piece`] returning the landing row.
    pub fn try_place_piece(&mut self, col: usize) -> Result<usize, MoveError> {
        if self.over {
            return Err(MoveError::GameOver);
        }
        if col >= crate::board::NB_COL {
            return Err(MoveError::ColumnOutOfRange(col));
        }
        let row = self
            .board
            .next_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;

        self.board.place(col as i32, row as i32, self.turn);
        self.last_move = Some((col, row));

        if self.check_win_at(col, row) {
            self.winner = Some(self.turn);
            self.over = true;
        } else if self.board.is_full() {
            self.over = true;
        } else {
            self.turn = self.turn.opponent();
        }
        Ok(row)
    }

    /// Play a sequence of columns, stopping at the first rejected move
    pub fn play_sequence(&mut self, cols: &[usize]) -> Result<(), MoveError> {
        for &col in cols {
            self.try_place_piece(col)?;
        }
        Ok(())
    }

    /// Back to an empty board with the original starting side
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.starting;
        self.winner = None;
        self.over = false;
        self.last_move = None;
    }
}
