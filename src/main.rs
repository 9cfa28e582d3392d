mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::BoostMode;
use anyhow::Context;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::supports_keyboard_enhancement;
use lexopt::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "\
Usage: dashsnake [options]

Steer the snake with the arrow keys (or wasd/hjkl); hold Space to dash.

Options:
  -c, --config <PATH>  Read configuration from <PATH>
  -h, --help           Show this help and exit
  -V, --version        Show the program version and exit
";

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dashsnake: {e}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == io::ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("dashsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load(&Config::default_path()?, true),
    }
    .context("failed to load configuration")?;
    let terminal = ratatui::init();
    // Hold-to-boost needs key release events, which only the kitty keyboard
    // protocol delivers; fall back to a boost toggle without it.
    let boost_mode = if supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok()
    {
        BoostMode::Hold
    } else {
        BoostMode::Toggle
    };
    let r = App::new(config.theme(), boost_mode).run(terminal);
    if boost_mode == BoostMode::Hold {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    ratatui::restore();
    r.map_err(Into::into)
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments.  Returns `Ok(None)` if the program
    /// should exit immediately after printing help or version information.
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut config = None;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    print!("{USAGE}");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(Args { config }))
    }
}
