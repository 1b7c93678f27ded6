//! Tracking records
//!
//! A [`Tracking`] is one shipment owned by a user. Its mutable fields
//! (`name`, `service_fee`, `order_time`, `status`) may only change while
//! the status is [`TrackingStatus::Created`].

use crate::error::{Error, Result};
use crate::types::{Timestamp, TrackingId, UserId};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a tracking
///
/// There is no transition table: while a tracking is `Created` its owner may
/// set any of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrackingStatus {
    /// Registered, not yet handed to a carrier. The only editable status.
    Created,
    /// On its way
    #[serde(rename = "In Transit")]
    InTransit,
    /// Handed to the recipient
    Delivered,
    /// Behind schedule
    Delayed,
    /// Will not be delivered
    Canceled,
}

impl TrackingStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [TrackingStatus; 5] = [
        TrackingStatus::Created,
        TrackingStatus::InTransit,
        TrackingStatus::Delivered,
        TrackingStatus::Delayed,
        TrackingStatus::Canceled,
    ];

    /// Display string, identical to the wire encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Created => "Created",
            TrackingStatus::InTransit => "In Transit",
            TrackingStatus::Delivered => "Delivered",
            TrackingStatus::Delayed => "Delayed",
            TrackingStatus::Canceled => "Canceled",
        }
    }
}

impl Default for TrackingStatus {
    fn default() -> Self {
        TrackingStatus::Created
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TrackingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("unknown status: {:?}", s)))
    }
}

/// One shipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tracking {
    /// Unique id, assigned by the engine
    pub id: TrackingId,
    /// Owner, immutable after creation
    pub user_id: UserId,
    /// Free-text label
    pub name: String,
    /// Lifecycle status
    #[serde(default)]
    pub status: TrackingStatus,
    /// When the order was placed
    pub order_time: Timestamp,
    /// When the tracking completed. Encoded as `""` while unset.
    #[serde(default, with = "empty_timestamp")]
    pub completed_time: Option<Timestamp>,
    /// Fee charged for the shipment. Absent in imported data means zero.
    #[serde(default)]
    pub service_fee: f64,
}

impl Tracking {
    /// Whether the update path may still change this tracking
    pub fn is_editable(&self) -> bool {
        self.status == TrackingStatus::Created
    }

    /// Elapsed time between order and completion, once completed
    pub fn duration(&self) -> Option<Duration> {
        self.completed_time.map(|done| done - self.order_time)
    }
}

/// Payload for creating a tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTracking {
    /// Label of the new tracking
    pub name: String,
    /// Fee charged for the shipment
    pub service_fee: f64,
}

impl NewTracking {
    /// Create a payload
    pub fn new(name: impl Into<String>, service_fee: f64) -> Self {
        Self {
            name: name.into(),
            service_fee,
        }
    }
}

/// Partial update of a tracking
///
/// Only fields that are `Some` are written; `None` (absent or `null` on the
/// wire) leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingPatch {
    /// New label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New fee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<f64>,
    /// New order time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_time: Option<Timestamp>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrackingStatus>,
}

impl TrackingPatch {
    /// Empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the service fee
    pub fn service_fee(mut self, fee: f64) -> Self {
        self.service_fee = Some(fee);
        self
    }

    /// Set the order time
    pub fn order_time(mut self, at: Timestamp) -> Self {
        self.order_time = Some(at);
        self
    }

    /// Set the status
    pub fn status(mut self, status: TrackingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.service_fee.is_none()
            && self.order_time.is_none()
            && self.status.is_none()
    }

    /// Write the present fields into `tracking`
    ///
    /// Does not check ownership or status; callers gate on those first.
    pub fn apply(&self, tracking: &mut Tracking) {
        if let Some(name) = &self.name {
            tracking.name = name.clone();
        }
        if let Some(fee) = self.service_fee {
            tracking.service_fee = fee;
        }
        if let Some(at) = self.order_time {
            tracking.order_time = at;
        }
        if let Some(status) = self.status {
            tracking.status = status;
        }
    }
}

/// `Option<Timestamp>` encoded as an RFC 3339 string, or `""` when unset.
mod empty_timestamp {
    use crate::types::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => s.serialize_str(&at.to_rfc3339()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Timestamp>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text
                .parse::<Timestamp>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
