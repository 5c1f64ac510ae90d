//! Error types for the command-line front end
//!
//! The XNOR routine and the lessons cannot fail. Everything that can go wrong
//! happens while reading arguments or talking to the terminal, and is reported
//! through [`CliError`].

use std::fmt;
use std::io;

/// Errors raised while parsing arguments or writing output
#[derive(Debug)]
pub enum CliError {
    /// First positional argument is not a known subcommand
    UnknownCommand { name: String },

    /// `lessons <name>` named a lesson that does not exist
    UnknownLesson { name: String },

    /// An argument that needs a partner was given alone (e.g. one operand)
    MissingValue { flag: String },

    /// An operand did not parse as a 32-bit signed integer
    InvalidOperand { flag: String, value: String },

    /// Extra argument the subcommand does not accept
    UnexpectedArgument { arg: String },

    /// Writing to stdout or driving the terminal failed
    Io(io::Error),
}

impl CliError {
    /// Whether printing usage alongside the message would help
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, CliError::Io(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownCommand { name } => {
                write!(f, "Unknown command '{}'", name)
            }
            CliError::UnknownLesson { name } => {
                write!(
                    f,
                    "Unknown lesson '{}' (run `bitlesson list` to see them all)",
                    name
                )
            }
            CliError::MissingValue { flag } => {
                write!(f, "Missing value for {}", flag)
            }
            CliError::InvalidOperand { flag, value } => {
                write!(
                    f,
                    "Invalid operand for {}: '{}' is not a 32-bit signed integer",
                    flag, value
                )
            }
            CliError::UnexpectedArgument { arg } => {
                write!(f, "Unexpected argument '{}'", arg)
            }
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
