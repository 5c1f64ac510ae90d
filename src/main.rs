// bitlesson: systems-language basics and a bitwise XNOR demo

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bitlesson::config::{usage, Command, Config};
use bitlesson::errors::CliError;
use bitlesson::lessons;
use bitlesson::transcript::Transcript;
use bitlesson::ui::App;
use bitlesson::xnor::{XnorMode, XnorReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args();
    let program_name = args.next().unwrap_or_else(|| "bitlesson".to_string());

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", usage(&program_name));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, &program_name) {
        eprintln!("Error: {}", e);
        if e.is_usage_error() {
            eprintln!();
            eprintln!("{}", usage(&program_name));
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(config: &Config, program_name: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &config.command {
        Command::Help => {
            writeln!(out, "{}", usage(program_name))?;
        }
        Command::Xnor { a, b, mode } => {
            write!(out, "{}", XnorReport::new(*a, *b, *mode))?;
        }
        Command::List => {
            for lesson in lessons::all() {
                writeln!(out, "{:<15} {}", lesson.name, lesson.title)?;
            }
        }
        Command::Lessons { names } => {
            let selected = if names.is_empty() {
                lessons::all().iter().collect::<Vec<_>>()
            } else {
                names
                    .iter()
                    .map(|name| lessons::find(name))
                    .collect::<Result<Vec<_>, _>>()?
            };

            if !config.quiet {
                eprintln!("Running {} lesson(s)...", selected.len());
            }
            let mut transcript = Transcript::new();
            lessons::run_many(selected, &mut transcript);
            for line in transcript.get_output() {
                writeln!(out, "{}", line)?;
            }
        }
        Command::View { a, b, mode } => {
            drop(out);
            view(*a, *b, *mode)?;
        }
    }

    Ok(())
}

fn view(a: i32, b: i32, mode: XnorMode) -> io::Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(a, b, mode);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
