//! Alpha-beta search over cloned game states
//!
//! Same traversal and cutoff policy as [`super::Minimax`], with sibling
//! pruning. Scores and chosen columns match minimax exactly; only the number
//! of generated nodes drops.
//!
//! # Example
//!
//! ```
//! use connect4::{AlphaBeta, GameState, Piece, Player, Search};
//!
//! let state = GameState::new(
//!     Player::human("Alice", Piece::Red).unwrap(),
//!     Player::human("Bob", Piece::Yellow).unwrap(),
//!     true,
//! )
//! .unwrap();
//! let result = AlphaBeta::new().search(&state, 4, Piece::Red);
//! assert!(result.column.is_some());
//! ```

use crate::board::Piece;
use crate::eval::evaluate;
use crate::game::GameState;

use super::{effective_depth, Search, SearchResult, TieBreak};

/// Fixed-depth minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct AlphaBeta {
    nodes: u64,
    tie_break: TieBreak,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { nodes: 0, tie_break }
    }

    /// Alpha-beta from `state` inside the `(alpha, beta)` window.
    ///
    /// A maximizing node stops at the first child scoring `>= beta`, a
    /// minimizing node at the first child scoring `<= alpha`.
    pub fn alpha_beta(
        &mut self,
        state: &GameState,
        depth: u8,
        maximizing: bool,
        perspective: Piece,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        if state.is_over() {
            return SearchResult {
                column: None,
                score: evaluate(state, perspective),
                nodes: self.nodes,
            };
        }

        let depth = effective_depth(depth);
        let columns = state.available_columns();
        let mut best_col = self.tie_break.incumbent(&columns);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in columns {
            let mut child = state.clone();
            child.place_piece(col);
            self.nodes += 1;

            let score = if depth == 1 {
                evaluate(&child, perspective)
            } else {
                self.alpha_beta(&child, depth - 1, !maximizing, perspective, alpha, beta)
                    .score
            };

            if maximizing {
                if score > best {
                    best = score;
                    best_col = col;
                }
                if score >= beta {
                    break;
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_col = col;
                }
                if score <= alpha {
                    break;
                }
                beta = beta.min(score);
            }
        }

        SearchResult {
            column: Some(best_col),
            score: best,
            nodes: self.nodes,
        }
    }
}

impl Search for AlphaBeta {
    fn search(&mut self, state: &GameState, depth: u8, perspective: Piece) -> SearchResult {
        self.nodes = 0;
        let maximizing = state.current_mark() == perspective;
        self.alpha_beta(state, depth, maximizing, perspective, i32::MIN, i32::MAX)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
