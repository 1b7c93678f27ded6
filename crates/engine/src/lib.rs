//! Engines for Courier
//!
//! - [`QueryEngine`]: filtered, sorted, paginated listings joined with votes
//! - [`MutationEngine`]: create, vote, and status-gated update
//! - [`SummaryAggregator`]: dashboard statistics over the whole store
//! - [`Engine`]: the three wired to one shared [`RecordStore`]
//!
//! All engines are synchronous and hold the store as `Arc<dyn RecordStore>`.
//! Only the mutation engine writes.
//!
//! [`RecordStore`]: courier_storage::RecordStore

#![warn(missing_docs)]

mod config;
mod engine;
mod mutation;
mod query;
mod summary;

#[cfg(test)]
mod test_support;

pub use config::EngineConfig;
pub use engine::Engine;
pub use mutation::MutationEngine;
pub use query::{compare_by, matches_search, QueryEngine};
pub use summary::SummaryAggregator;
