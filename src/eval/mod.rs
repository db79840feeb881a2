//! Evaluation module for Connect-4 positions
//!
//! The evaluation considers:
//! - Terminal outcomes (win, loss, draw)
//! - Vertical runs with room to grow
//! - Horizontal and diagonal runs with reachable open cells
//! - Isolated pieces, weighted toward the centre

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, heuristic, player_score};
pub use patterns::{run_score, PatternScore, COLUMN_BONUS};
