//! Chess Play - replays move lists against the rules engine.
//!
//! Moves come from the command line, from a TOML script, or interactively
//! from stdin when neither is given.

mod script;
mod session;

use anyhow::Context;
use chess_engine::GameState;
use clap::Parser;
use script::{parse_moves, Script};
use session::Session;
use std::io;
use std::path::PathBuf;

/// Chess Play - applies moves and prints the board.
#[derive(Parser)]
#[command(name = "chess-play")]
#[command(about = "Replays chess moves and reports checks and checkmates")]
struct Args {
    /// Starting layout, e.g. "4k3/8/8/8/8/8/8/4K3 w"
    #[arg(long)]
    layout: Option<String>,

    /// TOML script with a move list
    #[arg(long, conflicts_with = "moves")]
    script: Option<PathBuf>,

    /// Don't print the board after every move
    #[arg(long, short)]
    quiet: bool,

    /// Log level for engine events
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Moves in coordinate notation, e.g. e2e4 e7-e5
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let script = args
        .script
        .as_deref()
        .map(|path| {
            Script::load(path).with_context(|| format!("loading script {}", path.display()))
        })
        .transpose()?;

    let layout = args
        .layout
        .clone()
        .or_else(|| script.as_ref().and_then(|s| s.layout.clone()));
    let game = match &layout {
        Some(notation) => GameState::from_notation(notation)
            .with_context(|| format!("setting up layout {:?}", notation))?,
        None => GameState::new(),
    };

    let stdout = io::stdout();
    let mut session = Session::new(game, stdout.lock(), args.quiet);

    if let Some(script) = &script {
        if let Some(name) = &script.name {
            tracing::info!("Replaying script: {}", name);
        }
        session.replay(&script.parsed_moves()?)?;
    } else if !args.moves.is_empty() {
        session.replay(&parse_moves(&args.moves)?)?;
    } else {
        tracing::info!("Reading moves from stdin");
        session.run(io::stdin().lock())?;
    }

    tracing::info!(
        "{} moves in the current game",
        session.game().move_history().len()
    );
    Ok(())
}
