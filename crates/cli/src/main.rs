//! Courier CLI: query and update shipment trackings from a shell.
//!
//! Three modes:
//! - **Shell mode**: `courier [flags] COMMAND` runs one command and exits
//! - **REPL mode**: `courier [flags]` opens an interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "list --status Delivered" | courier` runs one command per line
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (warnings by default).

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use courier::Courier;
use courier_core::UserId;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_action, CliAction};
use state::SessionState;

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let db = match open_courier(&matches) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let user = matches
        .get_one::<String>("user")
        .cloned()
        .unwrap_or_else(|| "anonymous".to_string());
    info!(user = %user, "Starting session");

    let mut state = SessionState::new(&db, UserId::from(user));

    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

fn open_courier(matches: &clap::ArgMatches) -> Result<Courier, String> {
    let mut builder = Courier::builder();

    if let Some(limit) = matches.get_one::<String>("limit") {
        let limit = limit
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| format!("(error) --limit must be a positive integer, got {:?}", limit))?;
        builder = builder.default_limit(limit);
    }

    if let Some(path) = matches.get_one::<String>("seed") {
        builder = builder.seed_file(path);
    }

    builder
        .open()
        .map_err(|e| format!("(error) Failed to open: {}", e))
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches, state) {
        Ok(CliAction::Execute(cmd)) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                1
            }
        },
        Ok(CliAction::Meta(_)) => {
            eprintln!("(error) Meta-commands are only available in REPL mode");
            1
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
