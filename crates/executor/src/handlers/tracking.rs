//! Tracking command handlers

use courier_core::{NewTracking, TrackingId, TrackingPatch, TrackingQuery, UserId};
use courier_engine::Engine;

use crate::{Output, Result};

/// Handle ListTrackings command.
pub fn list(engine: &Engine, query: &TrackingQuery) -> Result<Output> {
    Ok(Output::Page(engine.list_trackings(query)?))
}

/// Handle ListStatuses command.
pub fn statuses(engine: &Engine) -> Result<Output> {
    Ok(Output::Statuses(engine.list_statuses()?))
}

/// Handle CreateTracking command.
pub fn create(engine: &Engine, user: &UserId, request: NewTracking) -> Result<Output> {
    Ok(Output::Tracking(engine.create_tracking(user, request)?))
}

/// Handle UpdateTracking command.
pub fn update(
    engine: &Engine,
    user: &UserId,
    tracking_id: &TrackingId,
    patch: &TrackingPatch,
) -> Result<Output> {
    Ok(Output::Tracking(
        engine.update_tracking(user, tracking_id, patch)?,
    ))
}
