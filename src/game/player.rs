//! Player identities and difficulty levels

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Piece;
use crate::engine::AIEngine;
use crate::error::SetupError;
use crate::search::Strategy;

use super::GameState;

/// Computer strength. Each level maps to a search depth and strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Weak,
    Medium,
    Strong,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Weak, Difficulty::Medium, Difficulty::Strong];

    /// Default search depth for this level
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Weak => 3,
            Difficulty::Medium => 6,
            Difficulty::Strong => 9,
        }
    }

    /// Default search strategy for this level
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Weak => Strategy::Minimax,
            Difficulty::Medium | Difficulty::Strong => Strategy::AlphaBeta,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Weak => "Weak",
            Difficulty::Medium => "Medium",
            Difficulty::Strong => "Strong",
        };
        f.write_str(name)
    }
}

/// Who picks the column for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Column comes from the interface (click, keyboard, ...)
    Human,
    /// Column comes from the search engine
    Computer(Difficulty),
}

/// A seat at the table: immutable name, mark and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    mark: Piece,
    kind: PlayerKind,
}

impl Player {
    /// Create a player holding `mark`.
    ///
    /// # Errors
    ///
    /// [`SetupError::InvalidMark`] unless `mark` is Red or Yellow.
    pub fn new(
        name: impl Into<String>,
        mark: Piece,
        kind: PlayerKind,
    ) -> Result<Self, SetupError> {
        if !mark.is_mark() {
            return Err(SetupError::InvalidMark(mark));
        }
        Ok(Self {
            name: name.into(),
            mark,
            kind,
        })
    }

    pub fn human(name: impl Into<String>, mark: Piece) -> Result<Self, SetupError> {
        Self::new(name, mark, PlayerKind::Human)
    }

    pub fn computer(
        name: impl Into<String>,
        mark: Piece,
        level: Difficulty,
    ) -> Result<Self, SetupError> {
        Self::new(name, mark, PlayerKind::Computer(level))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn mark(&self) -> Piece {
        self.mark
    }

    #[inline]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        self.kind == PlayerKind::Human
    }

    /// Difficulty of a computer player, `None` for humans
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            PlayerKind::Computer(level) => Some(level),
            PlayerKind::Human => None,
        }
    }

    /// Pick a column for the given state with the default engine settings.
    ///
    /// Humans return `None`: their choice belongs to the interface and is
    /// never routed through the search engine. Computers return `None` when
    /// the game is over or it is not their turn.
    pub fn play(&self, state: &GameState) -> Option<usize> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Computer(_) => AIEngine::new().choose_column(self, state).ok(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PlayerKind::Human => write!(f, "[Human] {} ({})", self.name, self.mark),
            PlayerKind::Computer(level) => {
                write!(f, "[Computer:{}] {} ({})", level, self.name, self.mark)
            }
        }
    }
}
