//! Dashboard statistics

use courier_core::{Result, TrackingSummary};
use courier_storage::RecordStore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Read-only aggregation over every tracking and vote
///
/// Statistics are global: they are not scoped to the requesting user.
pub struct SummaryAggregator {
    store: Arc<dyn RecordStore>,
}

impl SummaryAggregator {
    /// Create an aggregator over `store`
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Compute the dashboard summary
    pub fn summary(&self) -> Result<TrackingSummary> {
        let trackings = self.store.trackings()?;
        let votes = self.store.votes()?;

        let status_summary = trackings.iter().fold(BTreeMap::<_, usize>::new(), |mut acc, t| {
            *acc.entry(t.status).or_insert(0) += 1;
            acc
        });

        let total_service_fee: f64 = trackings.iter().map(|t| t.service_fee).sum();

        let average_rating = if votes.is_empty() {
            0.0
        } else {
            let sum: u32 = votes.iter().map(|v| u32::from(v.rating.value())).sum();
            round_to_tenth(f64::from(sum) / votes.len() as f64)
        };

        debug!(
            trackings = trackings.len(),
            votes = votes.len(),
            "Computed tracking summary"
        );

        Ok(TrackingSummary {
            total_trackings: trackings.len(),
            status_summary,
            total_service_fee,
            average_rating,
        })
    }
}

/// Round a non-negative value to one decimal from its exact binary value
///
/// 4.35 is stored just below 4.35 and becomes 4.3. Exact ties such as 4.25
/// round up.
fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    if (value * 4.0).fract() == 0.0 && scaled.fract() == 0.5 {
        return scaled.ceil() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}
