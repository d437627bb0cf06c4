//! Command Dispatcher
//!
//! Maps REPL input to handlers operating on the session.

mod handlers;
mod session;

pub use session::{ExploredArea, Session};

use tracing::debug;

use crate::error::{CommandError, Result};

/// Every command the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Dispatch table entry, also used to render `help`.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub command: Command,
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: Command::Help,
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        command: Command::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        command: Command::Map,
        name: "map",
        usage: "map",
        description: "Displays the next page of location areas",
    },
    CommandInfo {
        command: Command::MapBack,
        name: "mapb",
        usage: "mapb",
        description: "Displays the previous page of location areas",
    },
    CommandInfo {
        command: Command::Explore,
        name: "explore",
        usage: "explore <area>",
        description: "Lists the pokemon that can be encountered in an area",
    },
    CommandInfo {
        command: Command::Catch,
        name: "catch",
        usage: "catch <pokemon>",
        description: "Catches a pokemon found in the explored area",
    },
    CommandInfo {
        command: Command::Inspect,
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Shows details of a caught pokemon",
    },
    CommandInfo {
        command: Command::Pokedex,
        name: "pokedex",
        usage: "pokedex",
        description: "Lists all caught pokemon",
    },
];

impl Command {
    /// Resolves a command token, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name))
            .map(|info| info.command)
    }

    pub fn info(self) -> &'static CommandInfo {
        COMMANDS
            .iter()
            .find(|info| info.command == self)
            .unwrap_or(&COMMANDS[0])
    }
}

/// What the REPL should do after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and keep reading
    Lines(Vec<String>),
    /// Stop the loop
    Exit,
}

// == Dispatch ==
/// Parses `line` and runs the matching handler.
///
/// The first token selects the command; the second, if any, is its argument.
/// Extra tokens are ignored.
pub async fn dispatch(session: &mut Session, line: &str) -> Result<Reply> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(Reply::Lines(Vec::new()));
    };
    let arg = tokens.next().map(str::to_ascii_lowercase);

    let command =
        Command::from_name(name).ok_or_else(|| CommandError::UnknownCommand(line.trim().to_string()))?;
    debug!(?command, ?arg, "Dispatching command");

    match command {
        Command::Help => Ok(handlers::help()),
        Command::Exit => Ok(Reply::Exit),
        Command::Map => handlers::map(session).await,
        Command::MapBack => handlers::map_back(session).await,
        Command::Explore => handlers::explore(session, required(command, arg)?).await,
        Command::Catch => handlers::catch(session, required(command, arg)?).await,
        Command::Inspect => handlers::inspect(session, &required(command, arg)?),
        Command::Pokedex => Ok(handlers::pokedex(session)),
    }
}

fn required(command: Command, arg: Option<String>) -> Result<String> {
    arg.ok_or(CommandError::MissingArgument(command.info().usage))
}
