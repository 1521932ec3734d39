//! Command-line interface for liquid tic-tac-toe.

use clap::{Parser, Subcommand};
use liquid_server::{GameMode, StartOrder};
use liquid_tictactoe::{Board, Mark};
use std::path::PathBuf;

/// Liquid tic-tac-toe - perfect-play engine, HTTP service and terminal game
#[derive(Parser, Debug)]
#[command(name = "liquid-ttt")]
#[command(about = "Tic-tac-toe against a perfect engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Settings file (TOML)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Opponent: ai or two-player
        #[arg(long)]
        mode: Option<GameMode>,

        /// Your mark: x or o
        #[arg(long)]
        mark: Option<Mark>,

        /// Who opens against the computer: player or computer
        #[arg(long)]
        start: Option<StartOrder>,
    },

    /// Run the HTTP engine service
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Board as 9 characters, e.g. "XX..O...O" ('.' for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark to move: x or o
        #[arg(short, long)]
        mover: Mark,
    },

    /// Print the score of every legal move
    Analyze {
        /// Board as 9 characters, e.g. "....X...." ('.' for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark to move: x or o
        #[arg(short, long)]
        mover: Mark,
    },

    /// Let the engine play itself
    SelfPlay {
        /// Mark that opens: x or o
        #[arg(long, default_value = "x")]
        first: Mark,
    },
}
