//! Column-major 7x6 grid with gravity bookkeeping

use std::fmt;

use super::{Piece, NB_COL, NB_ROW};

/// Connect-4 grid.
///
/// Cells are stored column-major, `cells[col][row]`, with row 0 at the top.
/// Pieces in a column are contiguous from the bottom as long as callers only
/// place at [`Board::next_empty_row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; NB_ROW]; NB_COL],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; NB_ROW]; NB_COL],
        }
    }

    /// Check whether signed coordinates fall on the board
    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < NB_COL as i32 && row >= 0 && row < NB_ROW as i32
    }

    /// Get piece at a cell, `None` when off the board
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<Piece> {
        self.cells.get(col)?.get(row).copied()
    }

    /// Unchecked read for callers iterating `0..NB_COL` x `0..NB_ROW`
    #[inline]
    pub(crate) fn at(&self, col: usize, row: usize) -> Piece {
        self.cells[col][row]
    }

    /// Get piece at signed coordinates, `None` when off the board
    #[inline]
    pub fn probe(&self, col: i32, row: i32) -> Option<Piece> {
        if Self::is_valid(col, row) {
            Some(self.cells[col as usize][row as usize])
        } else {
            None
        }
    }

    /// Check if a cell holds a mark. Out-of-range cells are never occupied.
    #[inline]
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        self.probe(col, row).is_some_and(|p| p != Piece::Empty)
    }

    /// Write a piece into a cell.
    ///
    /// Returns false for out-of-range coordinates and for `Unavailable`,
    /// which only exists in evaluator scratch lines. Occupied cells are
    /// overwritten; use [`Board::next_empty_row`] to find the legal target.
    #[inline]
    pub fn place(&mut self, col: i32, row: i32, mark: Piece) -> bool {
        if !Self::is_valid(col, row) || mark == Piece::Unavailable {
            return false;
        }
        self.cells[col as usize][row as usize] = mark;
        true
    }

    /// Lowest empty row of a column, scanning up from the bottom.
    /// `None` when the column is full or out of range.
    pub fn next_empty_row(&self, col: usize) -> Option<usize> {
        let column = self.cells.get(col)?;
        (0..NB_ROW).rev().find(|&row| column[row] == Piece::Empty)
    }

    /// Columns with at least one empty cell, ascending.
    /// An empty result means the board is full.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..NB_COL)
            .filter(|&col| self.cells[col][0] == Piece::Empty)
            .collect()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|column| column[0] != Piece::Empty)
    }

    /// Total marks on the board
    pub fn piece_count(&self) -> usize {
        (0..NB_COL).map(|col| self.height(col)).sum()
    }

    /// Number of pieces stacked in a column
    pub fn height(&self, col: usize) -> usize {
        match self.next_empty_row(col) {
            Some(row) => NB_ROW - 1 - row,
            None if col < NB_COL => NB_ROW,
            None => 0,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..NB_COL {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 0..NB_ROW {
            for col in 0..NB_COL {
                write!(f, " {}", self.cells[col][row].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
