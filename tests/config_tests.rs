// Command-line parsing

use bitlesson::config::{usage, Command, Config};
use bitlesson::errors::CliError;
use bitlesson::xnor::XnorMode;

fn parse(args: &[&str]) -> Result<Config, CliError> {
    Config::from_args(args.iter().copied())
}

#[test]
fn test_no_arguments_is_shipped_xnor() {
    let config = parse(&[]).expect("Parsing failed");
    assert_eq!(config, Config::default());
    assert_eq!(
        config.command,
        Command::Xnor {
            a: 10,
            b: 10,
            mode: XnorMode::Scalar
        }
    );
    assert!(!config.quiet);
}

#[test]
fn test_xnor_with_operands_and_mode() {
    let config = parse(&["xnor", "-7", "2147483647", "--bitwise"]).unwrap();
    assert_eq!(
        config.command,
        Command::Xnor {
            a: -7,
            b: i32::MAX,
            mode: XnorMode::Bitwise
        }
    );
}

#[test]
fn test_mode_flag_without_command() {
    let config = parse(&["--bitwise"]).unwrap();
    assert_eq!(
        config.command,
        Command::Xnor {
            a: 10,
            b: 10,
            mode: XnorMode::Bitwise
        }
    );
}

#[test]
fn test_lessons_and_list() {
    let config = parse(&["lessons", "enums", "padding", "-q"]).unwrap();
    assert_eq!(
        config.command,
        Command::Lessons {
            names: vec!["enums".to_string(), "padding".to_string()]
        }
    );
    assert!(config.quiet);

    assert_eq!(parse(&["list"]).unwrap().command, Command::List);
    assert_eq!(
        parse(&["lessons"]).unwrap().command,
        Command::Lessons { names: vec![] }
    );
}

#[test]
fn test_view_and_help() {
    assert_eq!(
        parse(&["view", "1", "2", "--scalar"]).unwrap().command,
        Command::View {
            a: 1,
            b: 2,
            mode: XnorMode::Scalar
        }
    );
    assert_eq!(parse(&["xnor", "--help"]).unwrap().command, Command::Help);
}

#[test]
fn test_errors() {
    assert!(matches!(
        parse(&["frobnicate"]),
        Err(CliError::UnknownCommand { name }) if name == "frobnicate"
    ));
    assert!(matches!(
        parse(&["xnor", "1"]),
        Err(CliError::MissingValue { .. })
    ));
    assert!(matches!(
        parse(&["xnor", "1", "2", "3"]),
        Err(CliError::UnexpectedArgument { arg }) if arg == "3"
    ));
    assert!(matches!(
        parse(&["xnor", "1", "2147483648"]),
        Err(CliError::InvalidOperand { value, .. }) if value == "2147483648"
    ));
    assert!(matches!(
        parse(&["list", "extra"]),
        Err(CliError::UnexpectedArgument { .. })
    ));
    assert!(matches!(
        parse(&["lessons", "--bitwise"]),
        Err(CliError::UnexpectedArgument { arg }) if arg == "--bitwise"
    ));
    assert!(matches!(
        parse(&["--verbose"]),
        Err(CliError::UnexpectedArgument { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = parse(&["xnor", "1", "x"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid operand for B: 'x' is not a 32-bit signed integer"
    );
    assert!(err.is_usage_error());
}

#[test]
fn test_usage_mentions_commands() {
    let text = usage("bitlesson");
    for word in ["xnor", "lessons", "list", "view", "--bitwise", "--quiet"] {
        assert!(text.contains(word), "usage is missing {}", word);
    }
}
