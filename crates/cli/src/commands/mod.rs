pub mod prompt;

use thiserror::Error;

pub const CREATE_USAGE: &str = "create <filename> [content]";
pub const READ_USAGE: &str = "read <filename>";
pub const DELETE_USAGE: &str = "delete <filename>";
pub const INFO_USAGE: &str = "info <filename>";
pub const SERVER_USAGE: &str = "server [port]";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { name: String, content: String },
    Read { name: String },
    Delete { name: String },
    List,
    Info { name: String },
    /// Start the HTTP front end; `None` uses the configured default port.
    Server { port: Option<u16> },
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("Unknown command: {command}. Type 'help' for available commands.")]
    Unknown { command: String },

    #[error("Invalid port '{value}'. Usage: server [port]")]
    InvalidPort { value: String },
}

/// Parse a prompt line. Blank lines yield `Ok(None)`.
///
/// Arguments are whitespace separated; everything after the file name of
/// `create` is joined with single spaces to form the content.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();

    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = first.to_lowercase();

    let cmd = match command.as_str() {
        "create" => {
            let name = required(&mut words, CREATE_USAGE)?;
            let content = words.collect::<Vec<_>>().join(" ");
            Command::Create { name, content }
        }
        "read" => Command::Read {
            name: required(&mut words, READ_USAGE)?,
        },
        "delete" => Command::Delete {
            name: required(&mut words, DELETE_USAGE)?,
        },
        "info" => Command::Info {
            name: required(&mut words, INFO_USAGE)?,
        },
        "list" => Command::List,
        "server" => {
            let port = match words.next() {
                Some(raw) => Some(raw.parse::<u16>().map_err(|_| CommandError::InvalidPort {
                    value: raw.to_owned(),
                })?),
                None => None,
            };
            Command::Server { port }
        }
        "help" => Command::Help,
        "exit" => Command::Exit,
        _ => return Err(CommandError::Unknown { command }),
    };

    Ok(Some(cmd))
}

fn required<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    usage: &'static str,
) -> Result<String, CommandError> {
    words
        .next()
        .map(str::to_owned)
        .ok_or(CommandError::MissingArgument { usage })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
