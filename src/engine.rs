//! Main AI engine: turns a computer player into a column choice
//!
//! The engine looks up the player's difficulty in its [`EngineConfig`], runs
//! the configured strategy to the configured depth on a copy of the state, and
//! reports the column. Humans are rejected: their columns come from the
//! interface, never from the search.
//!
//! # Example
//!
//! ```
//! use connect4::{AIEngine, Difficulty, GameState, Piece, Player};
//!
//! let cpu = Player::computer("HAL", Piece::Red, Difficulty::Weak).unwrap();
//! let human = Player::human("Alice", Piece::Yellow).unwrap();
//! let mut state = GameState::new(cpu.clone(), human, true).unwrap();
//!
//! let mut engine = AIEngine::new();
//! let col = engine.choose_column(&cpu, &state).unwrap();
//! state.place_piece(col);
//! assert_eq!(state.move_count(), 1);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::Piece;
use crate::config::{EngineConfig, LevelConfig};
use crate::error::EngineError;
use crate::game::{GameState, Player, PlayerKind};
use crate::search::{SearchResult, Strategy};

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Column to play
    pub column: usize,
    /// Score of the column for the moving player
    pub score: i32,
    /// Strategy that produced the column
    pub strategy: Strategy,
    /// Search depth in plies
    pub depth: u8,
    /// Child states generated
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Column chooser for computer players.
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
    /// Source of per-search tie-break seeds, present when a seed is configured
    rng: Option<StdRng>,
}

impl AIEngine {
    /// Engine with the default difficulty table and deterministic tie-breaks
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = config.seed.map(StdRng::seed_from_u64);
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Column chosen for `player` in `state`.
    pub fn choose_column(
        &mut self,
        player: &Player,
        state: &GameState,
    ) -> Result<usize, EngineError> {
        self.choose_with_stats(player, state).map(|result| result.column)
    }

    /// Column chosen for `player` in `state`, with search statistics.
    ///
    /// # Errors
    ///
    /// - [`EngineError::HumanPlayer`] for human players
    /// - [`EngineError::GameOver`] when the state is terminal
    /// - [`EngineError::NotToMove`] when `player` does not hold the mark to move
    pub fn choose_with_stats(
        &mut self,
        player: &Player,
        state: &GameState,
    ) -> Result<MoveResult, EngineError> {
        let level = match player.kind() {
            PlayerKind::Human => return Err(EngineError::HumanPlayer(player.name().to_string())),
            PlayerKind::Computer(level) => level,
        };
        if state.is_over() {
            return Err(EngineError::GameOver);
        }
        if player.mark() != state.current_mark() {
            return Err(EngineError::NotToMove {
                name: player.name().to_string(),
                mark: player.mark(),
                to_move: state.current_mark(),
            });
        }

        let settings = self.config.levels.get(level);
        let start = Instant::now();
        let result = self.search(state, settings, player.mark());
        let time_ms = start.elapsed().as_millis() as u64;

        let column = result.column.ok_or(EngineError::NoLegalMove)?;
        debug!(
            player = player.name(),
            %level,
            strategy = %settings.strategy,
            depth = settings.depth,
            column,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "computer move chosen"
        );

        Ok(MoveResult {
            column,
            score: result.score,
            strategy: settings.strategy,
            depth: settings.depth,
            nodes: result.nodes,
            time_ms,
        })
    }

    /// Run one search with explicit settings, scored for `perspective`.
    pub fn search(
        &mut self,
        state: &GameState,
        settings: LevelConfig,
        perspective: Piece,
    ) -> SearchResult {
        let seed = self.rng.as_mut().map(|rng| rng.gen::<u64>());
        let mut searcher = settings.strategy.searcher(seed);
        searcher.search(state, settings.depth, perspective)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DifficultyTable;
    use crate::eval::PatternScore;
    use crate::game::Difficulty;

    fn cpu_vs_human(level: Difficulty) -> (Player, GameState) {
        let cpu = Player::computer("HAL", Piece::Red, level).unwrap();
        let human = Player::human("Alice", Piece::Yellow).unwrap();
        let state = GameState::new(cpu.clone(), human, true).unwrap();
        (cpu, state)
    }

    fn shallow_config() -> EngineConfig {
        let level = LevelConfig {
            depth: 2,
            strategy: Strategy::AlphaBeta,
        };
        EngineConfig {
            seed: None,
            levels: DifficultyTable {
                weak: level,
                medium: level,
                strong: level,
            },
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config(), &EngineConfig::default());
    }

    #[test]
    fn test_rejects_human() {
        let (_, state) = cpu_vs_human(Difficulty::Weak);
        let human = state.opponent().clone();
        let err = AIEngine::new().choose_column(&human, &state).unwrap_err();
        assert_eq!(err, EngineError::HumanPlayer("Alice".to_string()));
    }

    #[test]
    fn test_rejects_finished_game() {
        let (cpu, mut state) = cpu_vs_human(Difficulty::Weak);
        state.play_sequence(&[3, 4, 3, 4, 3, 4, 3]).unwrap();
        let err = AIEngine::new().choose_column(&cpu, &state).unwrap_err();
        assert_eq!(err, EngineError::GameOver);
    }

    #[test]
    fn test_rejects_player_out_of_turn() {
        let (cpu, mut state) = cpu_vs_human(Difficulty::Weak);
        state.place_piece(3);
        let err = AIEngine::new().choose_column(&cpu, &state).unwrap_err();
        assert_eq!(
            err,
            EngineError::NotToMove {
                name: "HAL".to_string(),
                mark: Piece::Red,
                to_move: Piece::Yellow,
            }
        );
    }

    #[test]
    fn test_weak_uses_minimax_depth() {
        let (cpu, state) = cpu_vs_human(Difficulty::Weak);
        let result = AIEngine::new().choose_with_stats(&cpu, &state).unwrap();
        assert_eq!(result.strategy, Strategy::Minimax);
        assert_eq!(result.depth, 3);
        assert_eq!(result.nodes, 7 + 49 + 343);
    }

    #[test]
    fn test_finds_immediate_win() {
        let (cpu, mut state) = cpu_vs_human(Difficulty::Weak);
        state.play_sequence(&[1, 0, 2, 5, 3, 6]).unwrap();
        let result = AIEngine::new().choose_with_stats(&cpu, &state).unwrap();
        assert_eq!(result.column, 4);
        assert_eq!(result.score, PatternScore::WIN);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let (cpu, mut state) = cpu_vs_human(Difficulty::Weak);
        state.play_sequence(&[6, 1, 6, 2, 0, 3]).unwrap();
        let col = AIEngine::with_config(shallow_config())
            .choose_column(&cpu, &state)
            .unwrap();
        assert_eq!(col, 4);
    }

    #[test]
    fn test_seeded_engine_is_reproducible() {
        let (cpu, state) = cpu_vs_human(Difficulty::Medium);
        let config = EngineConfig {
            seed: Some(17),
            ..shallow_config()
        };
        let mut a = AIEngine::with_config(config.clone());
        let mut b = AIEngine::with_config(config);
        for _ in 0..3 {
            assert_eq!(
                a.choose_column(&cpu, &state).unwrap(),
                b.choose_column(&cpu, &state).unwrap()
            );
        }
    }

    #[test]
    fn test_custom_level_settings() {
        let (cpu, state) = cpu_vs_human(Difficulty::Strong);
        let result = AIEngine::with_config(shallow_config())
            .choose_with_stats(&cpu, &state)
            .unwrap();
        assert_eq!(result.depth, 2);
        assert_eq!(result.strategy, Strategy::AlphaBeta);
        assert!(result.nodes <= 7 + 49);
    }
}
