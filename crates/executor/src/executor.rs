//! Dispatch from [`Command`] to the engines

use std::sync::Arc;

use courier_engine::Engine;
use tracing::{debug, warn};

use crate::handlers;
use crate::{Command, Output, Result};

/// Executes commands against a shared [`Engine`]
///
/// Cheap to clone; clones share the engine.
#[derive(Clone)]
pub struct Executor {
    engine: Arc<Engine>,
}

impl Executor {
    /// Create an executor over `engine`
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// The engine commands run against
    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    /// Execute one command
    ///
    /// Errors from the engines are returned unchanged.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        debug!(command = name, write = cmd.is_write(), "Executing command");

        let result = match cmd {
            Command::Ping => handlers::health::ping(),
            Command::ListTrackings { query } => handlers::tracking::list(&self.engine, &query),
            Command::ListStatuses => handlers::tracking::statuses(&self.engine),
            Command::CreateTracking { user, request } => {
                handlers::tracking::create(&self.engine, &user, request)
            }
            Command::UpdateTracking {
                user,
                tracking_id,
                patch,
            } => handlers::tracking::update(&self.engine, &user, &tracking_id, &patch),
            Command::VoteTracking {
                user,
                tracking_id,
                request,
            } => handlers::vote::vote(&self.engine, &user, &tracking_id, &request),
            Command::Summary => handlers::summary::summary(&self.engine),
        };

        if let Err(e) = &result {
            if e.is_serious() {
                warn!(command = name, error = %e, "Command failed");
            } else {
                debug!(command = name, code = e.code(), "Command rejected");
            }
        }
        result
    }

    /// Execute commands in order, collecting every result
    ///
    /// A failed command does not stop the ones after it.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
