//! Connect-4 console game
//!
//! Seats can be human (column typed on stdin) or computer at any difficulty.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect4::{
    AIEngine, Difficulty, EngineConfig, GameState, Outcome, Piece, Player, SetupError, NB_COL,
};

/// Who sits in a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Seat {
    Human,
    Weak,
    Medium,
    Strong,
}

impl Seat {
    fn player(self, name: String, mark: Piece) -> Result<Player, SetupError> {
        match self {
            Seat::Human => Player::human(name, mark),
            Seat::Weak => Player::computer(name, mark, Difficulty::Weak),
            Seat::Medium => Player::computer(name, mark, Difficulty::Medium),
            Seat::Strong => Player::computer(name, mark, Difficulty::Strong),
        }
    }
}

/// Play Connect-4 in the terminal.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect-4 against humans or the computer")]
struct Cli {
    /// Red seat
    #[arg(long, value_enum, default_value = "human")]
    red: Seat,

    /// Yellow seat
    #[arg(long, value_enum, default_value = "medium")]
    yellow: Seat,

    /// Red player name
    #[arg(long, default_value = "Red")]
    red_name: String,

    /// Yellow player name
    #[arg(long, default_value = "Yellow")]
    yellow_name: String,

    /// Let Yellow move first
    #[arg(long)]
    yellow_starts: bool,

    /// Path to TOML engine configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the tie-break seed
    #[arg(long)]
    seed: Option<u64>,

    /// Log search details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::load_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let red = cli.red.player(cli.red_name.clone(), Piece::Red)?;
    let yellow = cli.yellow.player(cli.yellow_name.clone(), Piece::Yellow)?;
    let mut state = GameState::new(red, yellow, !cli.yellow_starts)?;
    let mut engine = AIEngine::with_config(config);

    info!(red = %state.players()[0], yellow = %state.players()[1], "new game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.is_over() {
        println!("\n{}", state.board());
        let player = state.current_player().clone();

        let col = if player.is_human() {
            prompt_column(&player, &state, &mut lines)?
        } else {
            let result = engine
                .choose_with_stats(&player, &state)
                .context("computer failed to choose a column")?;
            println!("{} plays column {}", player, result.column);
            result.column
        };

        if let Err(err) = state.try_place_piece(col) {
            println!("{err}");
        }
    }

    println!("\n{}", state.board());
    match state.outcome() {
        Outcome::Winner(_) => {
            let winner = state.winner().map(|p| p.to_string()).unwrap_or_default();
            info!(%winner, moves = state.move_count(), "game over");
            println!("{winner} wins!");
        }
        Outcome::Draw => {
            info!(moves = state.move_count(), "game over: draw");
            println!("Draw.");
        }
        Outcome::InProgress => {}
    }
    Ok(())
}

/// Read columns from stdin until one is playable
fn prompt_column<B: BufRead>(
    player: &Player,
    state: &GameState,
    lines: &mut io::Lines<B>,
) -> Result<usize> {
    let available = state.available_columns();
    loop {
        print!("{} - column {:?}: ", player, available);
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game ended");
        };
        let line = line.context("reading column from stdin")?;
        match line.trim().parse::<usize>() {
            Ok(col) if available.contains(&col) => return Ok(col),
            Ok(col) if col >= NB_COL => println!("column must be in 0..{NB_COL}"),
            Ok(col) => println!("column {col} is full"),
            Err(_) => println!("enter a column number"),
        }
    }
}
