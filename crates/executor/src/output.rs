//! Results returned by the executor

use courier_core::{Tracking, TrackingPage, TrackingStatus, TrackingSummary, Vote};
use serde::{Deserialize, Serialize};

/// Successful result of a [`Command`](crate::Command)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Reply to `Ping`
    Pong {
        /// Always `"ok"`
        status: String,
        /// Crate version
        version: String,
    },
    /// Reply to `ListTrackings`
    Page(TrackingPage),
    /// Reply to `ListStatuses`
    Statuses(Vec<TrackingStatus>),
    /// The created or updated tracking
    Tracking(Tracking),
    /// The recorded vote
    Vote(Vote),
    /// Reply to `Summary`
    Summary(TrackingSummary),
}
