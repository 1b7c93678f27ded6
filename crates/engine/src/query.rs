//! Listing trackings
//!
//! ## Pipeline
//!
//! ```text
//! 1. search  - keep trackings whose id OR name contains the text (case-insensitive)
//! 2. status  - keep trackings with exactly this status
//! 3. sort    - stable three-way sort on one field, reversed for desc
//! 4. total   - count what survived 1-2
//! 5. slice   - [(page-1)*limit, (page-1)*limit + limit)
//! 6. rating  - join the first vote for each tracking on the page
//! ```
//!
//! Steps run in exactly this order. The pipeline works on a snapshot and
//! never reorders the store.

use crate::config::EngineConfig;
use courier_core::{
    Result, SortField, SortOrder, Tracking, TrackingPage, TrackingQuery, TrackingStatus,
    TrackingView,
};
use courier_storage::RecordStore;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Read-only listing over the record store
pub struct QueryEngine {
    store: Arc<dyn RecordStore>,
    config: EngineConfig,
}

impl QueryEngine {
    /// Create a query engine over `store`
    pub fn new(store: Arc<dyn RecordStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// List one page of trackings matching `query`
    ///
    /// An out-of-range page yields empty `data` with the correct `total`.
    ///
    /// The status filter is typed. A status string outside the five known
    /// values never reaches this point: decoding the query rejects it with
    /// `Validation` rather than returning an empty page.
    pub fn list(&self, query: &TrackingQuery) -> Result<TrackingPage> {
        let mut results = self.store.trackings()?;

        if let Some(text) = query.search.as_deref() {
            let needle = text.to_lowercase();
            results.retain(|t| matches_search(t, &needle));
        }

        if let Some(status) = query.status {
            results.retain(|t| t.status == status);
        }

        if let Some(field) = query.sort_by {
            let order = query.order.unwrap_or_default();
            results.sort_by(|a, b| {
                let ord = compare_by(field, a, b);
                match order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        let total = results.len();
        let page = positive_or(query.page, self.config.default_page);
        let limit = positive_or(query.limit, self.config.default_limit);
        let start = (page as usize - 1).saturating_mul(limit as usize);

        let data = results
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .map(|tracking| {
                let rating = self.store.first_vote_for(&tracking.id)?.map(|v| v.rating);
                Ok(TrackingView { tracking, rating })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(total, page, limit, returned = data.len(), "Listed trackings");

        Ok(TrackingPage {
            data,
            total,
            page,
            limit,
        })
    }

    /// Distinct statuses present in the store, in first-seen order
    pub fn statuses(&self) -> Result<Vec<TrackingStatus>> {
        let mut seen = Vec::new();
        for tracking in self.store.trackings()? {
            if !seen.contains(&tracking.status) {
                seen.push(tracking.status);
            }
        }
        Ok(seen)
    }
}

fn positive_or(value: Option<u32>, default: u32) -> u32 {
    match value {
        Some(n) if n > 0 => n,
        _ => default.max(1),
    }
}

/// Whether `needle` (already lowercased) occurs in the id or name
pub fn matches_search(tracking: &Tracking, needle: &str) -> bool {
    tracking.id.as_str().to_lowercase().contains(needle)
        || tracking.name.to_lowercase().contains(needle)
}

/// Three-way comparison of two trackings on one field
///
/// Ids are strings and compare as text, so "10" sorts before "9". Unset
/// completion times sort first. Incomparable fees (NaN) are treated as equal.
pub fn compare_by(field: SortField, a: &Tracking, b: &Tracking) -> Ordering {
    match field {
        SortField::Id => a.id.as_str().cmp(b.id.as_str()),
        SortField::UserId => a.user_id.cmp(&b.user_id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::OrderTime => a.order_time.cmp(&b.order_time),
        SortField::CompletedTime => a.completed_time.cmp(&b.completed_time),
        SortField::ServiceFee => a
            .service_fee
            .partial_cmp(&b.service_fee)
            .unwrap_or(Ordering::Equal),
    }
}
