//! Command Registry
//!
//! The table of REPL commands and the dispatcher that routes a parsed
//! command to its handler.

use crate::error::Result;
use crate::repl::commands::{self, AppState};

// == Command Kind ==
/// Identifies which handler a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

// == Command Outcome ==
/// What the prompt loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep prompting.
    Continue,
    /// Leave the REPL.
    Exit,
}

// == CLI Command ==
/// A REPL command: the name as typed, its help description, and the
/// handler that runs it.
#[derive(Debug)]
pub struct CliCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// All commands, in the order `help` lists them.
pub const COMMANDS: &[CliCommand] = &[
    CliCommand {
        name: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    CliCommand {
        name: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    CliCommand {
        name: "map",
        description: "Display the next 20 locations",
        kind: CommandKind::Map,
    },
    CliCommand {
        name: "mapb",
        description: "Display the previous 20 locations",
        kind: CommandKind::MapBack,
    },
    CliCommand {
        name: "explore",
        description: "Display the pokemon at a location",
        kind: CommandKind::Explore,
    },
    CliCommand {
        name: "catch",
        description: "Attempt to catch the specified Pokemon",
        kind: CommandKind::Catch,
    },
    CliCommand {
        name: "inspect",
        description: "View info about the specified Pokemon",
        kind: CommandKind::Inspect,
    },
    CliCommand {
        name: "pokedex",
        description: "View all captured pokemon",
        kind: CommandKind::Pokedex,
    },
];

// == Lookup ==
/// Finds a command by its typed name.
///
/// # Arguments
/// * `name` - The first word of the input line
///
/// # Returns
/// * `Option<&'static CliCommand>` - The matching command, if any
pub fn lookup(name: &str) -> Option<&'static CliCommand> {
    COMMANDS.iter().find(|command| command.name == name)
}

// == Dispatch ==
/// Runs the handler for a command.
///
/// # Arguments
/// * `kind` - Which command to run
/// * `state` - Shared REPL state
/// * `args` - Words after the command name
///
/// # Returns
/// * `Result<CommandOutcome>` - Whether the loop should keep prompting
///
/// # Errors
/// Returns whatever error the handler produced. The prompt loop prints
/// it and keeps going.
pub async fn dispatch(
    kind: CommandKind,
    state: &mut AppState,
    args: &[&str],
) -> Result<CommandOutcome> {
    match kind {
        CommandKind::Help => commands::command_help()?,
        CommandKind::Exit => {
            println!("closed the pokedex");
            return Ok(CommandOutcome::Exit);
        }
        CommandKind::Map => commands::command_map(state).await?,
        CommandKind::MapBack => commands::command_map_back(state).await?,
        CommandKind::Explore => commands::command_explore(state, args).await?,
        CommandKind::Catch => commands::command_catch(state, args).await?,
        CommandKind::Inspect => commands::command_inspect(state, args)?,
        CommandKind::Pokedex => commands::command_pokedex(state)?,
    }
    Ok(CommandOutcome::Continue)
}
