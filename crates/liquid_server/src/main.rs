//! Liquid tic-tac-toe - unified CLI
//!
//! Terminal game, HTTP engine service and one-shot engine queries.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use liquid_server::{GameMode, GameSettings, Session, StartOrder, api, console};
use liquid_tictactoe::{Board, Mark, Status, analyze, apply_move, compute_best_move, new_game};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, host } => {
            init_tracing("info,liquid_server=debug");
            run_http_server(host, port).await
        }
        Command::Play {
            settings,
            mode,
            mark,
            start,
        } => {
            init_tracing("warn");
            run_play(settings, mode, mark, start)
        }
        Command::BestMove { board, mover } => {
            init_tracing("warn");
            run_best_move(board, mover)
        }
        Command::Analyze { board, mover } => {
            init_tracing("warn");
            run_analyze(board, mover)
        }
        Command::SelfPlay { first } => {
            init_tracing("warn");
            run_self_play(first)
        }
    }
}

/// Installs the stderr subscriber, honoring `RUST_LOG` when set.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the HTTP engine service
async fn run_http_server(host: String, port: u16) -> Result<()> {
    info!("Starting liquid tic-tac-toe HTTP service");
    info!("Routes: /health /games /moves /best-move /analyze /status");
    api::serve(host, port).await?;
    Ok(())
}

/// Run the interactive terminal game
#[instrument]
fn run_play(
    settings_path: Option<PathBuf>,
    mode: Option<GameMode>,
    mark: Option<Mark>,
    start: Option<StartOrder>,
) -> Result<()> {
    let mut settings = match settings_path {
        Some(path) => GameSettings::from_file(&path)
            .with_context(|| format!("Loading settings from {}", path.display()))?,
        None => GameSettings::default(),
    };

    // Command-line flags override the file
    if let Some(mode) = mode {
        settings = settings.with_mode(mode);
    }
    if let Some(mark) = mark {
        settings = settings.with_player_mark(mark);
    }
    if let Some(start) = start {
        settings = settings.with_start_order(start);
    }
    info!(?settings, "Starting terminal game");

    let delay = Duration::from_millis(*settings.ai_delay_ms());
    let mut session = Session::new(settings);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console::run(&mut session, stdin.lock(), &mut stdout, delay)
}

/// Print the engine's choice for one position
fn run_best_move(board: Board, mover: Mark) -> Result<()> {
    let pos = compute_best_move(&board, mover, mover.opponent())
        .context("No move: the board is full or already won")?;
    println!("{} {}", pos.to_index(), pos.label());
    Ok(())
}

/// Print every candidate's score for one position
fn run_analyze(board: Board, mover: Mark) -> Result<()> {
    let scores = analyze(&board, mover, mover.opponent());
    if scores.is_empty() {
        anyhow::bail!("No move: the board is full or already won");
    }

    println!("{}\n", board.display());
    for score in scores {
        let (index, label) = (score.position.to_index(), score.position.label());
        println!("{index:>2} {label:<14} {:>4}", score.score);
    }
    Ok(())
}

/// Play the engine against itself and print every position
fn run_self_play(first: Mark) -> Result<()> {
    let mut state = new_game(first);
    while state.status() == &Status::InProgress {
        let mover = state.turn();
        let pos = compute_best_move(state.board(), mover, mover.opponent())
            .context("Engine found no move in a live game")?;
        state = apply_move(&state, pos.to_index() as i64)?;
        println!("{} plays {}\n\n{}\n", mover, pos, state.board().display());
    }
    println!("Result: {}", state.status());
    Ok(())
}
