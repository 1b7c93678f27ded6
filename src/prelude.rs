//! Convenient imports for Courier.
//!
//! ```ignore
//! use courier::prelude::*;
//!
//! let db = Courier::ephemeral()?;
//! db.trackings.create(&UserId::from("u1"), "Laptop", 50.0)?;
//! ```

// Main entry point
pub use crate::database::{Courier, CourierBuilder};

// Error handling
pub use courier_core::{Error, Result};

// Handles
pub use crate::api::{Dashboard, Trackings, Votes};

// Core types
pub use courier_core::{
    NewTracking, Rating, SortField, SortOrder, Tracking, TrackingId, TrackingPage, TrackingPatch,
    TrackingQuery, TrackingStatus, TrackingSummary, TrackingView, UserId, Vote,
};

// Seeding
pub use courier_storage::Fixture;
