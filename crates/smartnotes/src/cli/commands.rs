//! # Startup and the Read Loop
//!
//! `run()` parses the process arguments, loads the configuration, installs
//! the logger and builds the session. It then feeds stdin to the session one
//! line at a time until `quit` or end of input.
//!
//! Errors from startup propagate to `main` and end the process. Errors from
//! a session line are printed and the loop goes on.

use clap::Parser;
use colored::Colorize;
use log::{info, SetLoggerError};
use smartnotesapp::api::NotesApi;
use smartnotesapp::config::SmartNotesConfig;
use smartnotesapp::error::Result;
use smartnotesapp::seed::demo_notes;
use smartnotesapp::store::NoteStore;
use std::io::{self, BufRead, IsTerminal, Write};

use super::handlers::{Flow, Session};
use super::setup::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SmartNotesConfig::load(cli.config.as_deref())?;
    if let Err(e) = init_logging(&config.log_level, cli.verbose) {
        // No logger to report through; the session still works without one.
        eprintln!("Warning: logging disabled: {}", e);
    }

    let seed = config.seed_demo_notes && !cli.no_seed;
    let store = if seed {
        NoteStore::with_notes(demo_notes())
    } else {
        NoteStore::new()
    };
    info!(
        "event=session_start notes={} line_width={}",
        store.len(),
        config.line_width
    );

    let mut session = Session::new(NotesApi::new(store), config.line_width);
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("{}", "SmartNotes. Type 'help' for commands.".dimmed());
        if let Flow::Continue(listing) = session.execute_line("ls")? {
            print!("{}", listing);
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", session.prompt());
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };

        match session.execute_line(&line?) {
            Ok(Flow::Continue(output)) => print!("{}", output),
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }

    info!("event=session_end");
    Ok(())
}

/// `-v` selects info and `-vv` debug instead of the configured level.
/// `RUST_LOG` wins over all of them.
fn init_logging(configured: &str, verbosity: u8) -> std::result::Result<(), SetLoggerError> {
    let level = match verbosity {
        0 => configured,
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init()
}
