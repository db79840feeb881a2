//! Board representation for Connect-4

pub mod board;


pub use board::Board;

/// Number of columns (7)
pub const NB_COL: usize = 7;
/// Number of rows (6), row 0 is the top
pub const NB_ROW: usize = 6;
pub const TOTAL_CELLS: usize = NB_COL * NB_ROW; // 42

/// Cell contents.
///
/// `Unavailable` is never stored on a [`Board`]. The evaluator uses it for
/// empty cells that cannot be reached yet because the cell beneath is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Empty,
    Red,
    Yellow,
    Unavailable,
}

impl Piece {
    /// Both player marks, Red first
    pub const MARKS: [Piece; 2] = [Piece::Red, Piece::Yellow];

    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Red => Piece::Yellow,
            Piece::Yellow => Piece::Red,
            other => other,
        }
    }

    /// True for Red and Yellow
    #[inline]
    pub fn is_mark(self) -> bool {
        matches!(self, Piece::Red | Piece::Yellow)
    }

    /// Single-character symbol used by the text board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Red => 'R',
            Piece::Yellow => 'Y',
            Piece::Unavailable => '#',
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Empty => "Empty",
            Piece::Red => "Red",
            Piece::Yellow => "Yellow",
            Piece::Unavailable => "Unavailable",
        };
        f.write_str(name)
    }
}
