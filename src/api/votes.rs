//! Vote operations.

use std::sync::Arc;

use courier_core::{RatingInput, Result, TrackingId, UserId, Vote, VoteRequest};
use courier_engine::Engine;

/// Vote operations.
///
/// Access via `db.votes`.
pub struct Votes {
    engine: Arc<Engine>,
}

impl Votes {
    pub(crate) fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Rate a tracking.
    ///
    /// `rating` may be a number or a numeric string; it must be a whole
    /// number from 1 to 5. Each user votes at most once per tracking.
    ///
    /// ```ignore
    /// db.votes.cast(&UserId::from("u2"), &TrackingId::from("1"), 4)?;
    /// db.votes.cast(&UserId::from("u3"), &TrackingId::from("1"), "5")?;
    /// ```
    pub fn cast(
        &self,
        user: &UserId,
        tracking_id: &TrackingId,
        rating: impl Into<RatingInput>,
    ) -> Result<Vote> {
        self.engine
            .vote_tracking(user, tracking_id, &VoteRequest::new(rating))
    }

    /// The vote `user` cast on a tracking, if any.
    pub fn by(&self, user: &UserId, tracking_id: &TrackingId) -> Result<Option<Vote>> {
        self.engine.store().vote_by(user, tracking_id)
    }

    /// Every vote, in the order they were cast.
    pub fn all(&self) -> Result<Vec<Vote>> {
        self.engine.store().votes()
    }
}
