//! REPL Runner
//!
//! The prompt loop: read a line, route it through the registry, print
//! any error, repeat until `exit`, end of input, or Ctrl+C.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{debug, info};

use crate::repl::commands::AppState;
use crate::repl::registry::{self, CommandOutcome};

/// The prompt shown before every command.
const PROMPT: &str = "Pokedex -> ";

// == Run ==
/// Drives the REPL until the session ends.
///
/// # Arguments
/// * `state` - Session state shared by all commands
pub async fn run(state: &mut AppState) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", PROMPT);
        let _ = std::io::stdout().flush();

        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if handle_line(state, &line).await == CommandOutcome::Exit {
                            break;
                        }
                    }
                    // End of input, leave quietly
                    Ok(None) => {
                        println!();
                        break;
                    }
                    Err(err) => {
                        debug!(error = %err, "failed to read from stdin");
                        break;
                    }
                }
            }
            _ = signal::ctrl_c() => {
                println!();
                info!("received Ctrl+C, closing the pokedex");
                break;
            }
        }
    }
}

// == Handle Line ==
/// Parses one input line and runs the matching command. An empty line
/// shows the help text, an unknown command is reported and skipped.
async fn handle_line(state: &mut AppState, line: &str) -> CommandOutcome {
    let words: Vec<&str> = line.split_whitespace().collect();

    let (name, args) = match words.split_first() {
        Some((name, args)) => (*name, args),
        None => ("help", &[] as &[&str]),
    };

    let Some(command) = registry::lookup(name) else {
        println!("Invalid command: {}", line);
        return CommandOutcome::Continue;
    };

    match registry::dispatch(command.kind, state, args).await {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("{}", err);
            CommandOutcome::Continue
        }
    }
}
