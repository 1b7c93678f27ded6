//! Dashboard aggregates

use crate::tracking::TrackingStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Store-wide statistics over all trackings and votes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingSummary {
    /// Number of trackings
    pub total_trackings: usize,
    /// Trackings per status; statuses with no trackings are absent
    pub status_summary: BTreeMap<TrackingStatus, usize>,
    /// Sum of all service fees
    pub total_service_fee: f64,
    /// Mean vote rating rounded to one decimal, `0` when nobody voted
    pub average_rating: f64,
}

impl TrackingSummary {
    /// Count for one status, zero when absent
    pub fn count(&self, status: TrackingStatus) -> usize {
        self.status_summary.get(&status).copied().unwrap_or(0)
    }
}
