//! Seed data
//!
//! A fixture is a JSON document holding the initial records of a store:
//!
//! ```json
//! {
//!   "trackings": [{"id": "1", "userId": "u1", "name": "Pkg A", "status": "Delivered",
//!                  "orderTime": "2025-01-01T08:00:00Z", "completedTime": "2025-01-03T10:00:00Z",
//!                  "serviceFee": 50}],
//!   "votes": [{"id": "v1", "userId": "u2", "trackingId": "1", "trackingName": "Pkg A",
//!              "rating": 4, "createdAt": "2025-01-04T09:00:00Z"}]
//! }
//! ```
//!
//! Both arrays are optional. This is an import format only; the store never
//! writes it back.

use crate::memory::InMemoryStore;
use courier_core::{Result, Tracking, Vote};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initial trackings and votes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    /// Trackings, in store order
    pub trackings: Vec<Tracking>,
    /// Votes, in store order
    pub votes: Vec<Vote>,
}

impl Fixture {
    /// Parse a fixture document
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a fixture file
    ///
    /// A missing or unreadable file is `Unavailable`; malformed content is
    /// `Validation`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let fixture = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            trackings = fixture.trackings.len(),
            votes = fixture.votes.len(),
            "Loaded fixture"
        );
        Ok(fixture)
    }

    /// Build an in-memory store holding these records
    pub fn into_store(self) -> Result<InMemoryStore> {
        InMemoryStore::with_records(self.trackings, self.votes)
    }
}
