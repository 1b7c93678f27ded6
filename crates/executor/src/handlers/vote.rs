//! Vote command handler

use courier_core::{TrackingId, UserId, VoteRequest};
use courier_engine::Engine;

use crate::{Output, Result};

/// Handle VoteTracking command.
pub fn vote(
    engine: &Engine,
    user: &UserId,
    tracking_id: &TrackingId,
    request: &VoteRequest,
) -> Result<Output> {
    Ok(Output::Vote(engine.vote_tracking(user, tracking_id, request)?))
}
