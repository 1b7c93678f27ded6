//! In-memory record store
//!
//! Two insertion-ordered tables behind one `parking_lot::RwLock`, with
//! FxHashMap side indexes for O(1) lookups:
//! - tracking id -> row
//! - `(user, tracking)` -> vote row, the unique constraint
//! - tracking id -> first vote row, the rating join
//!
//! The tables also carry the tracking id counter, advanced by every insert.
//!
//! # Thread Safety
//!
//! Reads share the lock and clone out. Every write, including the guard of
//! a conditional update, runs under the exclusive lock, so a check can never
//! be invalidated between validation and apply.

use crate::id::IdAllocator;
use crate::traits::RecordStore;
use courier_core::{Error, Result, Tracking, TrackingId, UserId, Vote};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

#[derive(Debug, Default)]
struct Tables {
    trackings: Vec<Tracking>,
    tracking_rows: FxHashMap<TrackingId, usize>,
    votes: Vec<Vote>,
    vote_rows: FxHashMap<(UserId, TrackingId), usize>,
    first_vote_rows: FxHashMap<TrackingId, usize>,
    ids: IdAllocator,
}

impl Tables {
    fn push_tracking(&mut self, tracking: Tracking) -> Result<()> {
        if self.tracking_rows.contains_key(&tracking.id) {
            return Err(Error::Conflict(format!(
                "tracking {} already exists",
                tracking.id
            )));
        }
        self.ids.observe(&tracking.id);
        self.tracking_rows
            .insert(tracking.id.clone(), self.trackings.len());
        self.trackings.push(tracking);
        Ok(())
    }

    fn push_vote(&mut self, vote: Vote) -> Result<()> {
        let key = (vote.user_id.clone(), vote.tracking_id.clone());
        if self.vote_rows.contains_key(&key) {
            return Err(Error::Conflict(format!(
                "user {} has already voted on tracking {}",
                vote.user_id, vote.tracking_id
            )));
        }
        let row = self.votes.len();
        self.vote_rows.insert(key, row);
        self.first_vote_rows
            .entry(vote.tracking_id.clone())
            .or_insert(row);
        self.votes.push(vote);
        Ok(())
    }
}

/// Record store held entirely in memory
///
/// # Example
///
/// ```ignore
/// use courier_storage::{InMemoryStore, RecordStore};
///
/// let store = InMemoryStore::new();
/// assert_eq!(store.tracking_count()?, 0);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records, in order
    ///
    /// Fails with `Conflict` on a duplicate tracking id or a second vote for
    /// the same `(user, tracking)` pair. Votes may reference trackings that
    /// are not in the store.
    pub fn with_records(trackings: Vec<Tracking>, votes: Vec<Vote>) -> Result<Self> {
        let mut tables = Tables::default();
        for tracking in trackings {
            tables.push_tracking(tracking)?;
        }
        for vote in votes {
            tables.push_vote(vote)?;
        }
        trace!(
            trackings = tables.trackings.len(),
            votes = tables.votes.len(),
            "Seeded in-memory store"
        );
        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    /// Number of votes
    pub fn vote_count(&self) -> usize {
        self.tables.read().votes.len()
    }
}

impl RecordStore for InMemoryStore {
    fn trackings(&self) -> Result<Vec<Tracking>> {
        Ok(self.tables.read().trackings.clone())
    }

    fn votes(&self) -> Result<Vec<Vote>> {
        Ok(self.tables.read().votes.clone())
    }

    fn tracking(&self, id: &TrackingId) -> Result<Option<Tracking>> {
        let tables = self.tables.read();
        Ok(tables
            .tracking_rows
            .get(id)
            .map(|&row| tables.trackings[row].clone()))
    }

    fn first_vote_for(&self, tracking_id: &TrackingId) -> Result<Option<Vote>> {
        let tables = self.tables.read();
        Ok(tables
            .first_vote_rows
            .get(tracking_id)
            .map(|&row| tables.votes[row].clone()))
    }

    fn vote_by(&self, user_id: &UserId, tracking_id: &TrackingId) -> Result<Option<Vote>> {
        let tables = self.tables.read();
        Ok(tables
            .vote_rows
            .get(&(user_id.clone(), tracking_id.clone()))
            .map(|&row| tables.votes[row].clone()))
    }

    fn insert_tracking(&self, tracking: Tracking) -> Result<()> {
        trace!(id = %tracking.id, "Inserting tracking");
        self.tables.write().push_tracking(tracking)
    }

    fn insert_new_tracking(
        &self,
        build: &mut dyn FnMut(TrackingId) -> Tracking,
    ) -> Result<Tracking> {
        let mut tables = self.tables.write();
        // The counter itself only moves once the insert succeeds
        let mut next = tables.ids;
        let tracking = build(next.allocate());
        tables.push_tracking(tracking.clone())?;

        trace!(id = %tracking.id, "Inserted new tracking");
        Ok(tracking)
    }

    fn insert_vote(&self, vote: Vote) -> Result<()> {
        trace!(user = %vote.user_id, tracking = %vote.tracking_id, "Inserting vote");
        self.tables.write().push_vote(vote)
    }

    fn update_tracking(
        &self,
        id: &TrackingId,
        apply: &mut dyn FnMut(&mut Tracking) -> Result<()>,
    ) -> Result<Tracking> {
        let mut tables = self.tables.write();
        let row = *tables
            .tracking_rows
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("tracking {}", id)))?;

        let mut working = tables.trackings[row].clone();
        apply(&mut working)?;
        tables.trackings[row] = working.clone();

        trace!(id = %id, "Updated tracking");
        Ok(working)
    }

    fn tracking_count(&self) -> Result<usize> {
        Ok(self.tables.read().trackings.len())
    }

    fn max_numeric_id(&self) -> Result<u64> {
        Ok(self.tables.read().ids.current())
    }
}
