//! # Courier
//!
//! Tracking query and mutation engine with voting and dashboard summaries.
//!
//! Courier keeps shipment trackings and user ratings in memory and answers
//! the questions a tracking dashboard asks: filtered and sorted pages of
//! trackings, per-user votes, owner-only edits while a tracking is still
//! `Created`, and global statistics.
//!
//! ## Quick Start
//!
//! ```ignore
//! use courier::prelude::*;
//!
//! let db = Courier::builder().seed_file("trackings.json").open()?;
//! let me = UserId::from("u1");
//!
//! let created = db.trackings.create(&me, "Laptop", 50.0)?;
//! db.votes.cast(&UserId::from("u2"), &created.id, 4)?;
//!
//! let page = db.trackings.list(
//!     TrackingQuery::new()
//!         .search("lap")
//!         .sort_by(SortField::ServiceFee, SortOrder::Desc),
//! )?;
//! let stats = db.dashboard.summary()?;
//! ```
//!
//! ## Handles
//!
//! - [`Trackings`] - list, create and update trackings
//! - [`Votes`] - rate trackings
//! - [`Dashboard`] - aggregate statistics
//!
//! For a command-oriented interface bound to one user, see
//! [`Courier::session`].

#![warn(missing_docs)]

mod api;
mod database;

pub mod prelude;

// Re-export main entry points
pub use api::{Dashboard, Trackings, Votes};
pub use database::{Courier, CourierBuilder};

pub use courier_core::{Error, Result};
pub use courier_executor::{Command, Executor, Output, Session};
