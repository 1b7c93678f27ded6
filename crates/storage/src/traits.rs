//! Repository trait
//!
//! Engines only see `Arc<dyn RecordStore>`, so the backing technology can
//! change without touching query or mutation logic.
//!
//! Reads return owned snapshots. Writes that depend on a check run that
//! check inside the store, atomically with the write:
//! - [`RecordStore::insert_new_tracking`] owns tracking id allocation
//! - [`RecordStore::insert_vote`] owns the `(user, tracking)` unique constraint
//! - [`RecordStore::update_tracking`] runs the caller's guard and mutation as
//!   one conditional write

use courier_core::{Result, Tracking, TrackingId, UserId, Vote};

/// Holder of all trackings and votes
pub trait RecordStore: Send + Sync {
    /// All trackings in insertion order
    fn trackings(&self) -> Result<Vec<Tracking>>;

    /// All votes in insertion order
    fn votes(&self) -> Result<Vec<Vote>>;

    /// Look up one tracking
    fn tracking(&self, id: &TrackingId) -> Result<Option<Tracking>>;

    /// Earliest stored vote for a tracking, by any user
    fn first_vote_for(&self, tracking_id: &TrackingId) -> Result<Option<Vote>>;

    /// The vote a user cast on a tracking, if any
    fn vote_by(&self, user_id: &UserId, tracking_id: &TrackingId) -> Result<Option<Vote>>;

    /// Append a tracking
    ///
    /// Fails with `Conflict` if the id is taken.
    fn insert_tracking(&self, tracking: Tracking) -> Result<()>;

    /// Allocate the next sequential id and append the tracking built for it
    ///
    /// Allocation and insert are one write, so the id is unique across every
    /// caller sharing the store and is never spent on a failed insert.
    fn insert_new_tracking(
        &self,
        build: &mut dyn FnMut(TrackingId) -> Tracking,
    ) -> Result<Tracking>;

    /// Append a vote
    ///
    /// Fails with `Conflict` if the user already voted on the tracking, even
    /// when the caller's own check passed on a stale read.
    fn insert_vote(&self, vote: Vote) -> Result<()>;

    /// Conditionally rewrite a tracking in place
    ///
    /// `apply` receives a working copy under the store's write lock. If it
    /// returns `Ok` the copy replaces the stored record and is returned;
    /// if it returns `Err` nothing is written and the error is propagated.
    /// Fails with `NotFound` if the id is unknown.
    fn update_tracking(
        &self,
        id: &TrackingId,
        apply: &mut dyn FnMut(&mut Tracking) -> Result<()>,
    ) -> Result<Tracking>;

    /// Number of trackings
    fn tracking_count(&self) -> Result<usize> {
        Ok(self.trackings()?.len())
    }

    /// Largest numeric tracking id, zero when there is none
    ///
    /// Non-numeric ids are ignored.
    fn max_numeric_id(&self) -> Result<u64> {
        Ok(self
            .trackings()?
            .iter()
            .filter_map(|t| t.id.numeric())
            .max()
            .unwrap_or(0))
    }
}
