//! Plain minimax over cloned game states

use crate::board::Piece;
use crate::eval::evaluate;
use crate::game::GameState;

use super::{effective_depth, Search, SearchResult, TieBreak};

/// Exhaustive fixed-depth minimax.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
    tie_break: TieBreak,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { nodes: 0, tie_break }
    }

    /// Minimax from `state` with an explicit maximizing flag.
    ///
    /// Each child is a clone of `state` with one move applied. At the last
    /// ply the child is evaluated directly instead of searched. The first
    /// legal column (or the seeded pick) is kept unless a child scores
    /// strictly better.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        maximizing: bool,
        perspective: Piece,
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
                self.minimax(&child, depth - 1, !maximizing, perspective).score
            };

            let improved = if maximizing { score > best } else { score < best };
            if improved {
                best = score;
                best_col = col;
            }
        }

        SearchResult {
            column: Some(best_col),
            score: best,
            nodes: self.nodes,
        }
    }
}

impl Search for Minimax {
    fn search(&mut self, state: &GameState, depth: u8, perspective: Piece) -> SearchResult {
        self.nodes = 0;
        let maximizing = state.current_mark() == perspective;
        self.minimax(state, depth, maximizing, perspective)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
