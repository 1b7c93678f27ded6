//! Core types for the Courier tracking engine
//!
//! This crate defines the domain shared by every other crate:
//! - [`Tracking`] and [`TrackingStatus`]: shipment records and their lifecycle
//! - [`Vote`] and [`Rating`]: 1-5 ratings, at most one per user and tracking
//! - [`TrackingQuery`] and [`TrackingPage`]: listing requests and responses
//! - [`TrackingSummary`]: dashboard aggregates
//! - [`Error`]: the error kinds every operation reports

#![warn(missing_docs)]

pub mod error;
pub mod query;
pub mod summary;
pub mod tracking;
pub mod types;
pub mod vote;

pub use error::{Error, Result};
pub use query::{SortField, SortOrder, TrackingPage, TrackingQuery, TrackingView};
pub use summary::TrackingSummary;
pub use tracking::{NewTracking, Tracking, TrackingPatch, TrackingStatus};
pub use types::{Timestamp, TrackingId, UserId, VoteId};
pub use vote::{Rating, RatingInput, Vote, VoteRequest};
