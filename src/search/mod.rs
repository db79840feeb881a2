//! Search module for the Connect-4 AI
//!
//! Contains two interchangeable strategies over cloned game states:
//! - Plain minimax
//! - Alpha-beta pruning (same scores, fewer nodes)
//!
//! Both search to a fixed depth with no move ordering, transposition table or
//! iterative deepening. The caller's state is never mutated.

pub mod alphabeta;
pub mod minimax;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::Piece;
use crate::game::GameState;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

/// Which tree search a computer player runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
}

impl Strategy {
    /// Build a fresh searcher for this strategy
    pub fn searcher(self, seed: Option<u64>) -> Box<dyn Search> {
        match self {
            Strategy::Minimax => Box::new(Minimax::with_tie_break(TieBreak::from_seed(seed))),
            Strategy::AlphaBeta => Box::new(AlphaBeta::with_tie_break(TieBreak::from_seed(seed))),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Minimax => f.write_str("minimax"),
            Strategy::AlphaBeta => f.write_str("alpha-beta"),
        }
    }
}

/// Search result: chosen column and its score for the requesting player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the searched state was already terminal
    pub column: Option<usize>,
    /// Score for the perspective player
    pub score: i32,
    /// Child states generated
    pub nodes: u64,
}

/// Common interface of the search strategies.
pub trait Search {
    /// Search `depth` plies from `state` for `perspective`.
    ///
    /// The root maximizes when `perspective` is the player to move.
    fn search(&mut self, state: &GameState, depth: u8, perspective: Piece) -> SearchResult;

    /// Child states generated by the last search
    fn nodes(&self) -> u64;
}

/// Picks the provisional best column before any child is scored.
///
/// Without a seed the first legal column is used. With a seed the column is
/// drawn uniformly, reproducibly for a given seed.
#[derive(Debug, Clone, Default)]
pub struct TieBreak {
    rng: Option<StdRng>,
}

impl TieBreak {
    /// First legal column
    pub fn first() -> Self {
        Self { rng: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::first, Self::seeded)
    }

    /// Provisional column for a non-empty list of legal columns
    pub(crate) fn incumbent(&mut self, columns: &[usize]) -> usize {
        match self.rng.as_mut() {
            Some(rng) => columns[rng.gen_range(0..columns.len())],
            None => columns[0],
        }
    }
}

/// Depth used when a search asks for 0 plies
#[inline]
pub(crate) fn effective_depth(depth: u8) -> u8 {
    depth.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use rand::seq::SliceRandom;

    fn random_position(rng: &mut StdRng, moves: usize) -> GameState {
        let mut state = GameState::new(
            Player::human("Alice", Piece::Red).unwrap(),
            Player::human("Bob", Piece::Yellow).unwrap(),
            rng.gen_bool(0.5),
        )
        .unwrap();
        for _ in 0..moves {
            if state.is_over() {
                break;
            }
            let cols = state.available_columns();
            if let Some(&col) = cols.choose(rng) {
                state.place_piece(col);
            }
        }
        state
    }

    #[test]
    fn test_tie_break_first() {
        let mut tb = TieBreak::first();
        assert_eq!(tb.incumbent(&[2, 4, 6]), 2);
    }

    #[test]
    fn test_tie_break_seeded_is_reproducible() {
        let cols = [0, 1, 2, 3, 4, 5, 6];
        let mut a = TieBreak::seeded(42);
        let mut b = TieBreak::seeded(42);
        for _ in 0..20 {
            let pick = a.incumbent(&cols);
            assert_eq!(pick, b.incumbent(&cols));
            assert!(cols.contains(&pick));
        }
    }

    #[test]
    fn test_strategies_agree_on_random_positions() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..60 {
            let moves = rng.gen_range(0..20);
            let state = random_position(&mut rng, moves);
            if state.is_over() {
                continue;
            }
            for depth in 1..=3 {
                for perspective in Piece::MARKS {
                    let mut mm = Minimax::new();
                    let mut ab = AlphaBeta::new();
                    let a = mm.search(&state, depth, perspective);
                    let b = ab.search(&state, depth, perspective);
                    assert_eq!(
                        a.score, b.score,
                        "score mismatch at depth {depth} for {perspective}\n{}",
                        state.board()
                    );
                    assert_eq!(a.column, b.column);
                    assert!(b.nodes <= a.nodes);
                }
            }
        }
    }

    #[test]
    fn test_seeded_search_keeps_scores() {
        let mut rng = StdRng::seed_from_u64(99);
        for seed in 0..10 {
            let state = random_position(&mut rng, 8);
            if state.is_over() {
                continue;
            }
            let mover = state.current_mark();
            let plain = Minimax::new().search(&state, 2, mover);
            let seeded = Strategy::AlphaBeta.searcher(Some(seed)).search(&state, 2, mover);
            assert_eq!(plain.score, seeded.score);
        }
    }

    #[test]
    fn test_searcher_factory() {
        let state = random_position(&mut StdRng::seed_from_u64(5), 4);
        let mover = state.current_mark();
        let mut searcher = Strategy::Minimax.searcher(None);
        let result = searcher.search(&state, 2, mover);
        assert_eq!(searcher.nodes(), result.nodes);
        assert!(result.column.is_some());
    }
}
