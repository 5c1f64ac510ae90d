//! Command-line configuration
//!
//! Arguments are read by hand, the same way for every subcommand:
//!
//! ```text
//! bitlesson                          XNOR of 10 and 10, scalar mode
//! bitlesson xnor [A B] [--bitwise|--scalar]
//! bitlesson lessons [NAME...]
//! bitlesson list
//! bitlesson view [A B] [--bitwise|--scalar]
//! ```
//!
//! `--quiet` silences progress messages on stderr; `--help` prints usage.

use crate::constants::{DEFAULT_A, DEFAULT_B, DEFAULT_MODE};
use crate::errors::CliError;
use crate::xnor::XnorMode;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Xnor { a: i32, b: i32, mode: XnorMode },
    /// Run the named lessons, or all of them when `names` is empty
    Lessons { names: Vec<String> },
    List,
    View { a: i32, b: i32, mode: XnorMode },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            command: Command::Xnor {
                a: DEFAULT_A,
                b: DEFAULT_B,
                mode: DEFAULT_MODE,
            },
            quiet: false,
        }
    }
}

impl Config {
    /// Parse arguments, not including the program name
    pub fn from_args<I, S>(args: I) -> Result<Config, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut quiet = false;
        let mut help = false;
        let mut mode = None;
        let mut positionals = Vec::new();

        for arg in args.into_iter().map(Into::into) {
            match arg.as_str() {
                "-q" | "--quiet" => quiet = true,
                "-h" | "--help" => help = true,
                "--bitwise" => mode = Some(XnorMode::Bitwise),
                "--scalar" => mode = Some(XnorMode::Scalar),
                flag if flag.starts_with("--") => {
                    return Err(CliError::UnexpectedArgument {
                        arg: flag.to_string(),
                    });
                }
                _ => positionals.push(arg),
            }
        }

        if help {
            return Ok(Config {
                command: Command::Help,
                quiet,
            });
        }

        let mut rest = positionals.into_iter();
        let command = match rest.next().as_deref() {
            None => {
                let (a, b) = parse_operands(rest)?;
                Command::Xnor {
                    a,
                    b,
                    mode: mode.unwrap_or(DEFAULT_MODE),
                }
            }
            Some("xnor") => {
                let (a, b) = parse_operands(rest)?;
                Command::Xnor {
                    a,
                    b,
                    mode: mode.unwrap_or(DEFAULT_MODE),
                }
            }
            Some("view") => {
                let (a, b) = parse_operands(rest)?;
                Command::View {
                    a,
                    b,
                    mode: mode.unwrap_or(DEFAULT_MODE),
                }
            }
            Some("lessons") => {
                reject_mode(mode)?;
                Command::Lessons {
                    names: rest.collect(),
                }
            }
            Some("list") => {
                reject_mode(mode)?;
                if let Some(arg) = rest.next() {
                    return Err(CliError::UnexpectedArgument { arg });
                }
                Command::List
            }
            Some(other) => {
                return Err(CliError::UnknownCommand {
                    name: other.to_string(),
                });
            }
        };

        Ok(Config { command, quiet })
    }
}

fn reject_mode(mode: Option<XnorMode>) -> Result<(), CliError> {
    match mode {
        Some(m) => Err(CliError::UnexpectedArgument {
            arg: format!("--{}", m),
        }),
        None => Ok(()),
    }
}

/// Zero or two operands; one alone is ambiguous
fn parse_operands(mut rest: impl Iterator<Item = String>) -> Result<(i32, i32), CliError> {
    let Some(first) = rest.next() else {
        return Ok((DEFAULT_A, DEFAULT_B));
    };
    let Some(second) = rest.next() else {
        return Err(CliError::MissingValue {
            flag: "B".to_string(),
        });
    };
    if let Some(arg) = rest.next() {
        return Err(CliError::UnexpectedArgument { arg });
    }
    Ok((parse_operand("A", &first)?, parse_operand("B", &second)?))
}

fn parse_operand(flag: &str, value: &str) -> Result<i32, CliError> {
    value.parse().map_err(|_| CliError::InvalidOperand {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Usage text printed for `--help` and argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {0} [COMMAND] [OPTIONS]\n\
         \n\
         Commands:\n  \
           xnor [A B]         Print the XNOR of A and B (default: 10 10)\n  \
           lessons [NAME...]  Run the named lessons, or all of them\n  \
           list               List lesson names\n  \
           view [A B]         Browse lessons in the terminal viewer\n\
         \n\
         Options:\n  \
           --bitwise          Per-bit XNOR instead of the equality check\n  \
           --scalar           Equality check broadcast to 32 bits (default)\n  \
           -q, --quiet        No progress messages on stderr\n  \
           -h, --help         Show this message",
        program_name
    )
}
