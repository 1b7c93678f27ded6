//! Identifier and time types
//!
//! - [`TrackingId`]: sequential, string-encoded tracking identifier
//! - [`UserId`]: verified identity of the caller
//! - [`VoteId`]: opaque vote token

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time, always UTC. Encoded as RFC 3339 on the wire.
pub type Timestamp = DateTime<Utc>;

/// Identifier of a tracking record
///
/// Ids issued by the engine are decimal integers ("1", "2", ...). Ids
/// imported from fixtures may be arbitrary strings, which is why the type
/// keeps the string form and exposes the numeric value separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    /// Create an id from its string form
    pub fn new(id: impl Into<String>) -> Self {
        TrackingId(id.into())
    }

    /// Create the id for a sequence number
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_core::TrackingId;
    ///
    /// assert_eq!(TrackingId::from_sequence(8).as_str(), "8");
    /// ```
    pub fn from_sequence(n: u64) -> Self {
        TrackingId(n.to_string())
    }

    /// Numeric value of the id, if it is a plain decimal integer
    pub fn numeric(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// String form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackingId {
    fn from(s: &str) -> Self {
        TrackingId(s.to_string())
    }
}

impl From<String> for TrackingId {
    fn from(s: String) -> Self {
        TrackingId(s)
    }
}

/// Verified identity of the caller
///
/// Produced by the authentication layer; the engine trusts it as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user id
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    /// String form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

/// Opaque vote identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteId(String);

impl VoteId {
    /// Create a new random VoteId using UUID v4
    pub fn generate() -> Self {
        VoteId(uuid::Uuid::new_v4().to_string())
    }

    /// String form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VoteId {
    fn from(s: &str) -> Self {
        VoteId(s.to_string())
    }
}
