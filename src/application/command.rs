//! Line-oriented command parsing
//!
//! ```text
//! CREATE <path>
//! MOVE <source> <target>
//! DELETE <path>
//! LIST
//! ```
//!
//! Verbs are case-insensitive. Arguments are separated by single spaces,
//! so doubled spaces yield empty arguments and count toward the arity.

use std::fmt;

use thiserror::Error;

/// A known command verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Move,
    Delete,
    List,
}

impl Verb {
    /// Usage synopsis shown when the argument count is wrong.
    pub fn synopsis(&self) -> &'static str {
        match self {
            Verb::Create => "CREATE <directory_name>",
            Verb::Move => "MOVE <source_directory> <target_directory>",
            Verb::Delete => "DELETE <directory_name>",
            Verb::List => "LIST",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {}", .0.synopsis())]
    Usage(Verb),

    #[error("Unknown command")]
    Unknown,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { path: String },
    Move { source: String, target: String },
    Delete { path: String },
    List,
    /// Blank line
    Noop,
}

impl Command {
    /// Parse a trimmed input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split(' ');
        let verb = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match verb.to_ascii_uppercase().as_str() {
            "CREATE" => match args.as_slice() {
                [path] => Ok(Command::Create {
                    path: path.to_string(),
                }),
                _ => Err(CommandError::Usage(Verb::Create)),
            },
            "MOVE" => match args.as_slice() {
                [source, target] => Ok(Command::Move {
                    source: source.to_string(),
                    target: target.to_string(),
                }),
                _ => Err(CommandError::Usage(Verb::Move)),
            },
            "DELETE" => match args.as_slice() {
                [path] => Ok(Command::Delete {
                    path: path.to_string(),
                }),
                _ => Err(CommandError::Usage(Verb::Delete)),
            },
            "LIST" if args.is_empty() => Ok(Command::List),
            "LIST" => Err(CommandError::Usage(Verb::List)),
            "" => Ok(Command::Noop),
            _ => Err(CommandError::Unknown),
        }
    }
}

/// Canonical text form, parseable by [`Command::parse`].
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create { path } => write!(f, "CREATE {path}"),
            Command::Move { source, target } => write!(f, "MOVE {source} {target}"),
            Command::Delete { path } => write!(f, "DELETE {path}"),
            Command::List => f.write_str("LIST"),
            Command::Noop => Ok(()),
        }
    }
}
