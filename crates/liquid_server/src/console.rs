//! Line-based interactive game.

use crate::session::Session;
use liquid_tictactoe::{Position, Status};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, instrument};

const HELP: &str = "Enter a square as 0-8 or a name like \"center\" or \"top left\".\n\
Commands: undo (u), reset (r), hint (h), help (?), quit (q).";

/// Runs an interactive game until `quit` or end of input.
///
/// `delay` is the pause before printing the computer's reply.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    delay: Duration,
) -> anyhow::Result<()> {
    writeln!(output, "{HELP}")?;
    if let Some(opening) = last_computer_opening(session) {
        writeln!(output, "Computer opens at {opening}")?;
    }
    render(session, output)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();
        debug!(command = %command, "Console input");

        match command.as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "?" | "help" => writeln!(output, "{HELP}")?,
            "u" | "undo" => match session.undo() {
                Ok(()) => writeln!(output, "Move taken back.")?,
                Err(e) => writeln!(output, "{e}")?,
            },
            "r" | "reset" => {
                writeln!(output, "New game.")?;
                if let Some(opening) = session.reset() {
                    writeln!(output, "Computer opens at {opening}")?;
                }
            }
            "h" | "hint" => match session.hint() {
                Some(pos) => writeln!(output, "Best move: {pos}")?,
                None => writeln!(output, "The game is over.")?,
            },
            other => match Position::from_label_or_number(other) {
                None => writeln!(output, "Unknown input {other:?}. Type help for commands.")?,
                Some(pos) => match session.play(pos.to_index() as i64) {
                    Ok(turn) => {
                        writeln!(output, "You played {}", turn.player_move)?;
                        if let Some(reply) = turn.reply {
                            if !delay.is_zero() {
                                std::thread::sleep(delay);
                            }
                            writeln!(output, "Computer played {reply}")?;
                        }
                    }
                    Err(e) => writeln!(output, "{e}")?,
                },
            },
        }

        render(session, output)?;
    }

    Ok(())
}

fn last_computer_opening(session: &Session) -> Option<Position> {
    if session.first_mark() != session.settings().computer_mark() || session.history_len() != 1 {
        return None;
    }
    Position::ALL
        .into_iter()
        .find(|&pos| !session.state().board().is_empty(pos))
}

fn render<W: Write>(session: &Session, output: &mut W) -> std::io::Result<()> {
    let state = session.state();
    writeln!(output, "\n{}\n", state.board().display())?;
    match state.status() {
        Status::InProgress => writeln!(output, "Player {} to move.", state.turn()),
        finished => writeln!(output, "Game over: {finished}. Type reset to play again."),
    }
}
