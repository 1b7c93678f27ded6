//! Commands accepted by the executor

use courier_core::{NewTracking, TrackingId, TrackingPatch, TrackingQuery, UserId, VoteRequest};
use serde::{Deserialize, Serialize};

/// One request to the engine
///
/// Mutating commands carry the acting user. Reads are not scoped to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Health check
    Ping,

    /// One filtered, sorted page of trackings
    ListTrackings {
        /// Search, filter, sort and pagination parameters
        #[serde(default)]
        query: TrackingQuery,
    },

    /// Distinct statuses present in the store
    ListStatuses,

    /// Create a tracking owned by `user`
    CreateTracking {
        /// Owner of the new tracking
        user: UserId,
        /// Name and service fee
        request: NewTracking,
    },

    /// Rate a tracking
    VoteTracking {
        /// Voter
        user: UserId,
        /// Tracking being rated
        tracking_id: TrackingId,
        /// The rating
        request: VoteRequest,
    },

    /// Edit a tracking that is still `Created`
    UpdateTracking {
        /// Must be the owner
        user: UserId,
        /// Tracking being edited
        tracking_id: TrackingId,
        /// Fields to overwrite
        patch: TrackingPatch,
    },

    /// Dashboard statistics
    Summary,
}

impl Command {
    /// Command name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::ListTrackings { .. } => "ListTrackings",
            Command::ListStatuses => "ListStatuses",
            Command::CreateTracking { .. } => "CreateTracking",
            Command::VoteTracking { .. } => "VoteTracking",
            Command::UpdateTracking { .. } => "UpdateTracking",
            Command::Summary => "Summary",
        }
    }

    /// Whether the command writes to the store
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::CreateTracking { .. }
                | Command::VoteTracking { .. }
                | Command::UpdateTracking { .. }
        )
    }
}
