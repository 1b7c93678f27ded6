//! REPL and pipe modes.
//!
//! Both read one command per line, split it with shell quoting rules, and
//! run it against the same session. Meta-commands (`user`, `help`, `quit`)
//! are checked before clap sees the line.

use std::io::{self, BufRead};

use courier_core::UserId;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::build_repl_cmd;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

const HISTORY_FILE: &str = ".courier_history";

/// What the caller should do after one line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Failed,
    Quit,
}

/// Interactive prompt; returns on `quit`, Ctrl-D or Ctrl-C.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) cannot start line editor: {}", e);
            return;
        }
    };
    if rl.load_history(HISTORY_FILE).is_err() {
        debug!(file = HISTORY_FILE, "No REPL history loaded");
    }

    loop {
        match rl.readline(&state.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if execute_line(&line, state, mode) == LineOutcome::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    if let Err(e) = rl.save_history(HISTORY_FILE) {
        debug!(error = %e, "Could not save REPL history");
    }
}

/// Read commands from stdin until EOF.
///
/// Returns 1 if any line failed, 0 otherwise. Blank lines and `#` comments
/// are skipped.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let mut exit_code = 0;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match execute_line(trimmed, state, mode) {
            LineOutcome::Continue => {}
            LineOutcome::Failed => exit_code = 1,
            LineOutcome::Quit => break,
        }
    }
    exit_code
}

/// Parse and run one line, printing the result.
pub fn execute_line(line: &str, state: &mut SessionState, mode: OutputMode) -> LineOutcome {
    if let Some(meta) = check_meta_command(line) {
        return run_meta(meta, state);
    }

    let args = match shlex::split(line) {
        Some(args) => args,
        None => {
            eprintln!("(error) Unbalanced quotes");
            return LineOutcome::Failed;
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e.render());
            return LineOutcome::Failed;
        }
    };

    let cmd = match matches_to_action(&matches, state) {
        Ok(CliAction::Execute(cmd)) => cmd,
        Ok(CliAction::Meta(meta)) => return run_meta(meta, state),
        Err(e) => {
            eprintln!("(error) {}", e);
            return LineOutcome::Failed;
        }
    };

    match state.execute(cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            LineOutcome::Continue
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            LineOutcome::Failed
        }
    }
}

fn run_meta(meta: MetaCommand, state: &mut SessionState) -> LineOutcome {
    match meta {
        MetaCommand::Quit => LineOutcome::Quit,
        MetaCommand::User { id: None } => {
            println!("{}", state.user());
            LineOutcome::Continue
        }
        MetaCommand::User { id: Some(id) } => {
            state.switch_user(UserId::from(id));
            LineOutcome::Continue
        }
        MetaCommand::Help { command } => {
            let mut cmd = build_repl_cmd();
            match command {
                Some(name) => match cmd.find_subcommand_mut(&name) {
                    Some(sub) => println!("{}", sub.render_help()),
                    None => {
                        eprintln!("(error) Unknown command: {}", name);
                        return LineOutcome::Failed;
                    }
                },
                None => {
                    println!("{}", cmd.render_help());
                    println!("Meta-commands:\n  user [ID]    show or switch the acting user\n  help [CMD]   show help\n  quit, exit   leave");
                }
            }
            LineOutcome::Continue
        }
    }
}
