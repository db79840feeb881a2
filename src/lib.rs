//! Connect-4 game model and AI engine
//!
//! Plays 4-in-a-row on a 7x6 grid between any mix of human and computer
//! players:
//! - Gravity: a piece lands on the lowest empty cell of its column
//! - Four in a row (horizontal, vertical or diagonal) wins
//! - A full board without four in a row is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Column-major grid and piece types
//! - [`rules`]: Win detection through the last placed cell
//! - [`game`]: Game state, players and difficulty levels
//! - [`eval`]: Heuristic position evaluation
//! - [`search`]: Minimax and alpha-beta search
//! - [`engine`]: Column choice for computer players
//! - [`config`]: TOML-loadable difficulty table
//!
//! # Quick Start
//!
//! ```
//! use connect4::{AIEngine, Difficulty, GameState, Outcome, Piece, Player};
//!
//! let red = Player::computer("Red bot", Piece::Red, Difficulty::Weak).unwrap();
//! let yellow = Player::computer("Yellow bot", Piece::Yellow, Difficulty::Weak).unwrap();
//! let mut state = GameState::new(red, yellow, true).unwrap();
//! let mut engine = AIEngine::new();
//!
//! while !state.is_over() {
//!     let player = state.current_player().clone();
//!     let col = engine.choose_column(&player, &state).unwrap();
//!     state.place_piece(col);
//! }
//! assert_ne!(state.outcome(), Outcome::InProgress);
//! ```
//!
//! # Search
//!
//! Both strategies explore clones of the state to a fixed depth, evaluating
//! the position reached at the last ply. Alpha-beta returns the same scores
//! and columns as minimax while generating fewer nodes.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, NB_COL, NB_ROW};
pub use config::{DifficultyTable, EngineConfig, LevelConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, EngineError, MoveError, SetupError};
pub use eval::evaluate;
pub use game::{Difficulty, GameState, Outcome, Player, PlayerKind};
pub use search::{AlphaBeta, Minimax, Search, SearchResult, Strategy};
