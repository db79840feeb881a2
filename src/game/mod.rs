//! Game session state: players, turn order and terminal detection

pub mod player;
pub mod state;

pub use player::{Difficulty, Player, PlayerKind};
pub use state::{GameState, Outcome};
