//! Listing requests and responses

use crate::error::{Error, Result};
use crate::tracking::{Tracking, TrackingStatus};
use crate::vote::Rating;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tracking field a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// `id`, numeric when both ids are numeric
    Id,
    /// `userId`
    UserId,
    /// `name`
    Name,
    /// `status`, by display string
    Status,
    /// `orderTime`
    OrderTime,
    /// `completedTime`, unset first
    CompletedTime,
    /// `serviceFee`
    ServiceFee,
}

impl SortField {
    /// All sortable fields
    pub const ALL: [SortField; 7] = [
        SortField::Id,
        SortField::UserId,
        SortField::Name,
        SortField::Status,
        SortField::OrderTime,
        SortField::CompletedTime,
        SortField::ServiceFee,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::UserId => "userId",
            SortField::Name => "name",
            SortField::Status => "status",
            SortField::OrderTime => "orderTime",
            SortField::CompletedTime => "completedTime",
            SortField::ServiceFee => "serviceFee",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("cannot sort by {:?}", s)))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(Error::Validation(format!(
                "order must be \"asc\" or \"desc\", got {:?}",
                other
            ))),
        }
    }
}

/// Listing request
///
/// Every field is optional. Filters apply in order (search, then status),
/// then sorting, then pagination.
///
/// # Example
///
/// ```
/// use courier_core::{SortField, SortOrder, TrackingQuery, TrackingStatus};
///
/// let query = TrackingQuery::new()
///     .search("pkg")
///     .status(TrackingStatus::Delivered)
///     .sort_by(SortField::OrderTime, SortOrder::Desc)
///     .page(2)
///     .limit(20);
/// assert_eq!(query.page, Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingQuery {
    /// Case-insensitive substring of `id` or `name`
    pub search: Option<String>,
    /// Exact status; unknown names fail to decode
    pub status: Option<TrackingStatus>,
    /// Field to sort by; store order when absent
    pub sort_by: Option<SortField>,
    /// Direction, ascending when absent
    pub order: Option<SortOrder>,
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl TrackingQuery {
    /// Query matching everything, first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by substring of id or name
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Filter by status
    pub fn status(mut self, status: TrackingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sort by a field
    pub fn sort_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.order = Some(order);
        self
    }

    /// Select a page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Tracking enriched with its derived rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingView {
    /// The stored record
    #[serde(flatten)]
    pub tracking: Tracking,
    /// Rating of the first vote for this tracking, if any
    pub rating: Option<Rating>,
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingPage {
    /// Records on this page
    pub data: Vec<TrackingView>,
    /// Matching records across all pages
    pub total: usize,
    /// Page number served
    pub page: u32,
    /// Page size used
    pub limit: u32,
}

impl TrackingPage {
    /// Number of pages needed for `total` records
    pub fn page_count(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        let limit = self.limit as usize;
        (self.total + limit - 1) / limit
    }
}
