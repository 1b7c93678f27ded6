//! Typed wrapper over the executor
//!
//! A [`Session`] remembers which user is acting, the way a shell remembers
//! its current directory. Writes are issued as that user; reads are global.
//!
//! ```ignore
//! let mut session = Session::new(engine, UserId::from("u1"));
//! let created = session.create_tracking("Pkg A", 50.0)?;
//! session.switch_user(UserId::from("u2"));
//! session.vote_tracking(&created.id, 4)?;
//! ```

use std::sync::Arc;

use courier_core::{
    NewTracking, RatingInput, Tracking, TrackingId, TrackingPage, TrackingPatch, TrackingQuery,
    TrackingStatus, TrackingSummary, UserId, Vote, VoteRequest,
};
use courier_engine::Engine;
use tracing::debug;

use crate::{Command, Error, Executor, Output, Result};

/// Executor bound to an acting user
pub struct Session {
    executor: Executor,
    user: UserId,
}

impl Session {
    /// Start a session acting as `user`
    pub fn new(engine: Arc<Engine>, user: UserId) -> Self {
        Self::with_executor(Executor::new(engine), user)
    }

    /// Start a session on an existing executor
    pub fn with_executor(executor: Executor, user: UserId) -> Self {
        Self { executor, user }
    }

    /// The underlying executor
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The acting user
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Act as a different user from now on
    pub fn switch_user(&mut self, user: UserId) {
        debug!(from = %self.user, to = %user, "Switched user");
        self.user = user;
    }

    /// Run a raw command
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        self.executor.execute(cmd)
    }

    /// Health check; returns the engine version
    pub fn ping(&self) -> Result<String> {
        match self.executor.execute(Command::Ping)? {
            Output::Pong { version, .. } => Ok(version),
            _ => Err(unexpected("Ping")),
        }
    }

    /// List one page of trackings
    pub fn list_trackings(&self, query: TrackingQuery) -> Result<TrackingPage> {
        match self.executor.execute(Command::ListTrackings { query })? {
            Output::Page(page) => Ok(page),
            _ => Err(unexpected("ListTrackings")),
        }
    }

    /// Distinct statuses in the store
    pub fn list_statuses(&self) -> Result<Vec<TrackingStatus>> {
        match self.executor.execute(Command::ListStatuses)? {
            Output::Statuses(statuses) => Ok(statuses),
            _ => Err(unexpected("ListStatuses")),
        }
    }

    /// Create a tracking owned by the acting user
    pub fn create_tracking(&self, name: &str, service_fee: f64) -> Result<Tracking> {
        match self.executor.execute(Command::CreateTracking {
            user: self.user.clone(),
            request: NewTracking::new(name, service_fee),
        })? {
            Output::Tracking(t) => Ok(t),
            _ => Err(unexpected("CreateTracking")),
        }
    }

    /// Rate a tracking as the acting user
    ///
    /// Accepts a number or a numeric string.
    pub fn vote_tracking(
        &self,
        tracking_id: &TrackingId,
        rating: impl Into<RatingInput>,
    ) -> Result<Vote> {
        match self.executor.execute(Command::VoteTracking {
            user: self.user.clone(),
            tracking_id: tracking_id.clone(),
            request: VoteRequest::new(rating),
        })? {
            Output::Vote(v) => Ok(v),
            _ => Err(unexpected("VoteTracking")),
        }
    }

    /// Edit a tracking owned by the acting user
    pub fn update_tracking(
        &self,
        tracking_id: &TrackingId,
        patch: TrackingPatch,
    ) -> Result<Tracking> {
        match self.executor.execute(Command::UpdateTracking {
            user: self.user.clone(),
            tracking_id: tracking_id.clone(),
            patch,
        })? {
            Output::Tracking(t) => Ok(t),
            _ => Err(unexpected("UpdateTracking")),
        }
    }

    /// Dashboard statistics
    pub fn summary(&self) -> Result<TrackingSummary> {
        match self.executor.execute(Command::Summary)? {
            Output::Summary(s) => Ok(s),
            _ => Err(unexpected("Summary")),
        }
    }
}

fn unexpected(command: &str) -> Error {
    Error::Unavailable(format!("unexpected output for {}", command))
}
