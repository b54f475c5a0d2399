//! REPL Module
//!
//! The interactive shell: a command registry, the handlers behind each
//! command, and the prompt loop that ties them together.

pub mod commands;
pub mod registry;
pub mod runner;

pub use commands::AppState;
pub use registry::{dispatch, lookup, CliCommand, CommandKind, CommandOutcome, COMMANDS};
pub use runner::run;
