//! Typed handles over the engine.
//!
//! Each handle covers one area and is reached as a field of
//! [`Courier`](crate::Courier): `db.trackings`, `db.votes`, `db.dashboard`.

mod dashboard;
mod trackings;
mod votes;

pub use dashboard::Dashboard;
pub use trackings::Trackings;
pub use votes::Votes;
