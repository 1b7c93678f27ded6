//! ArgMatches → Command/MetaCommand conversion.
//!
//! Translates clap's parsed arguments into the appropriate action:
//! - Engine commands → `CliAction::Execute(Command)`
//! - REPL meta-commands → `CliAction::Meta`

use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ArgMatches;
use courier_core::{
    NewTracking, SortField, SortOrder, TrackingId, TrackingPatch, TrackingQuery, TrackingStatus,
    VoteRequest,
};
use courier_executor::Command;

use crate::state::SessionState;

/// The result of parsing user input.
#[allow(dead_code)]
#[derive(Debug)]
pub enum CliAction {
    /// A command to execute via the session.
    Execute(Command),
    /// A REPL-only meta-command.
    Meta(MetaCommand),
}

/// REPL meta-commands.
#[derive(Debug, PartialEq)]
pub enum MetaCommand {
    /// Show or change the acting user
    User { id: Option<String> },
    Help { command: Option<String> },
    Quit,
}

/// Check for REPL meta-commands before delegating to clap.
///
/// Returns `Some(MetaCommand)` if the line is a meta-command, `None` otherwise.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let cmd = parts.next()?;
    let rest = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help { command: rest }),
        "user" => Some(MetaCommand::User { id: rest }),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches, state: &SessionState) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let cmd = match sub_name {
        "ping" => Command::Ping,
        "list" => Command::ListTrackings {
            query: parse_query(m)?,
        },
        "statuses" => Command::ListStatuses,
        "create" => {
            let name = required(m, "name")?;
            let fee = parse_fee(&required(m, "fee")?)?;
            Command::CreateTracking {
                user: state.user().clone(),
                request: NewTracking::new(name, fee),
            }
        }
        "vote" => Command::VoteTracking {
            user: state.user().clone(),
            tracking_id: TrackingId::from(required(m, "id")?),
            // Validated by the engine
            request: VoteRequest::new(required(m, "rating")?.as_str()),
        },
        "update" => Command::UpdateTracking {
            user: state.user().clone(),
            tracking_id: TrackingId::from(required(m, "id")?),
            patch: parse_patch(m)?,
        },
        "summary" => Command::Summary,
        other => return Err(format!("Unknown command: {}", other)),
    };
    Ok(CliAction::Execute(cmd))
}

// =========================================================================
// Helpers
// =========================================================================

fn required(m: &ArgMatches, id: &str) -> Result<String, String> {
    m.get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", id))
}

fn parse_query(m: &ArgMatches) -> Result<TrackingQuery, String> {
    let mut query = TrackingQuery::new();
    if let Some(text) = m.get_one::<String>("search") {
        query = query.search(text.as_str());
    }
    if let Some(status) = m.get_one::<String>("status") {
        query = query.status(parse_status(status)?);
    }
    if let Some(field) = m.get_one::<String>("sort-by") {
        let field = SortField::from_str(field).map_err(|e| e.to_string())?;
        let order = m
            .get_one::<String>("order")
            .map(|o| SortOrder::from_str(o))
            .transpose()
            .map_err(|e| e.to_string())?
            .unwrap_or_default();
        query = query.sort_by(field, order);
    } else if m.get_one::<String>("order").is_some() {
        return Err("--order needs --sort-by".to_string());
    }
    if let Some(page) = parse_count(m, "page")? {
        query = query.page(page);
    }
    if let Some(limit) = parse_count(m, "limit")? {
        query = query.limit(limit);
    }
    Ok(query)
}

fn parse_patch(m: &ArgMatches) -> Result<TrackingPatch, String> {
    let mut patch = TrackingPatch::new();
    if let Some(name) = m.get_one::<String>("name") {
        patch = patch.name(name.as_str());
    }
    if let Some(fee) = m.get_one::<String>("fee") {
        patch = patch.service_fee(parse_fee(fee)?);
    }
    if let Some(at) = m.get_one::<String>("order-time") {
        let at = DateTime::parse_from_rfc3339(at)
            .map_err(|e| format!("Invalid order time {:?}: {}", at, e))?
            .with_timezone(&Utc);
        patch = patch.order_time(at);
    }
    if let Some(status) = m.get_one::<String>("status") {
        patch = patch.status(parse_status(status)?);
    }
    if patch.is_empty() {
        return Err("Nothing to update: pass --name, --fee, --order-time or --status".to_string());
    }
    Ok(patch)
}

fn parse_status(s: &str) -> Result<TrackingStatus, String> {
    TrackingStatus::from_str(s).map_err(|e| e.to_string())
}

fn parse_fee(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .ok_or_else(|| format!("Invalid fee: {:?}", s))
}

fn parse_count(m: &ArgMatches, id: &str) -> Result<Option<u32>, String> {
    m.get_one::<String>(id)
        .map(|s| s.parse::<u32>())
        .transpose()
        .map_err(|e| format!("Invalid {}: {}", id, e))
}
