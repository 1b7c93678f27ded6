//! Writes: create, vote, update
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! | Operation | 1 | 2 | 3 |
//! |-----------|---|---|---|
//! | vote      | NotFound (no tracking) | Conflict (already voted) | Validation (rating) |
//! | update    | NotFound (no tracking) | Forbidden (not owner) | Conflict (not `Created`) |
//!
//! The final guard of each write is enforced by the store itself: the vote
//! unique constraint in `insert_vote`, and the owner/status gate inside the
//! conditional `update_tracking`. Two racing requests therefore cannot both
//! succeed; the loser sees `Conflict`.

use courier_core::{
    Error, NewTracking, Result, Tracking, TrackingId, TrackingPatch, TrackingStatus, UserId,
    Vote, VoteId, VoteRequest,
};
use courier_storage::RecordStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// The only writer of the record store
pub struct MutationEngine {
    store: Arc<dyn RecordStore>,
}

impl MutationEngine {
    /// Create a mutation engine
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create a tracking owned by `user_id`
    ///
    /// The new tracking is `Created`, ordered now, and not completed. Its id
    /// is the store's next sequence number, shared by every engine over the
    /// same store.
    pub fn create(&self, user_id: &UserId, request: NewTracking) -> Result<Tracking> {
        let order_time = Utc::now();
        let tracking = self.store.insert_new_tracking(&mut |id| Tracking {
            id,
            user_id: user_id.clone(),
            name: request.name.clone(),
            status: TrackingStatus::Created,
            order_time,
            completed_time: None,
            service_fee: request.service_fee,
        })?;

        info!(id = %tracking.id, user = %user_id, "Created tracking");
        Ok(tracking)
    }

    /// Record `user_id`'s rating of a tracking
    ///
    /// The tracking's status is not checked.
    pub fn vote(
        &self,
        user_id: &UserId,
        tracking_id: &TrackingId,
        request: &VoteRequest,
    ) -> Result<Vote> {
        let tracking = self
            .store
            .tracking(tracking_id)?
            .ok_or_else(|| Error::NotFound(format!("tracking {}", tracking_id)))?;

        if self.store.vote_by(user_id, tracking_id)?.is_some() {
            return Err(Error::Conflict(format!(
                "user {} has already voted on tracking {}",
                user_id, tracking_id
            )));
        }

        let rating = request.rating.parse()?;

        let vote = Vote {
            id: VoteId::generate(),
            user_id: user_id.clone(),
            tracking_id: tracking.id,
            tracking_name: tracking.name,
            rating,
            created_at: Utc::now(),
        };
        self.store.insert_vote(vote.clone())?;

        info!(tracking = %tracking_id, user = %user_id, rating = %rating, "Recorded vote");
        Ok(vote)
    }

    /// Apply `patch` to a tracking owned by `user_id` that is still `Created`
    pub fn update(
        &self,
        user_id: &UserId,
        tracking_id: &TrackingId,
        patch: &TrackingPatch,
    ) -> Result<Tracking> {
        let updated = self.store.update_tracking(tracking_id, &mut |tracking: &mut Tracking| {
            if &tracking.user_id != user_id {
                return Err(Error::Forbidden(format!(
                    "tracking {} belongs to another user",
                    tracking_id
                )));
            }
            if !tracking.is_editable() {
                return Err(Error::Conflict(format!(
                    "tracking {} cannot be edited when status is {}",
                    tracking_id, tracking.status
                )));
            }
            patch.apply(tracking);
            Ok(())
        })?;

        info!(id = %tracking_id, user = %user_id, "Updated tracking");
        Ok(updated)
    }

    /// Last tracking id handed out by the store
    pub fn last_id(&self) -> Result<u64> {
        self.store.max_numeric_id()
    }
}
