//! Game rules for Connect-4
//!
//! Gravity is enforced by [`crate::board::Board::next_empty_row`]; this module
//! holds the win condition.

pub mod win;

pub use win::{check_win_at, directional_windows, has_run, window, DIRECTIONS, WIN_LENGTH};
