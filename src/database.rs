//! Main entry point for Courier.
//!
//! This module provides the `Courier` struct, which owns the engine and
//! hands out typed handles and sessions over it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use courier_core::{Result, UserId};
use courier_engine::{Engine, EngineConfig};
use courier_executor::{Executor, Session};
use courier_storage::{Fixture, InMemoryStore};
use tracing::info;

use crate::api::{Dashboard, Trackings, Votes};

/// The Courier tracking engine.
///
/// Create one with [`Courier::ephemeral`] or [`Courier::builder`], then share
/// it across threads; every handle is `Send + Sync`.
///
/// # Example
///
/// ```ignore
/// use courier::prelude::*;
///
/// let db = Courier::builder()
///     .default_limit(25)
///     .seed_file("./trackings.json")
///     .open()?;
///
/// let page = db.trackings.list(TrackingQuery::new())?;
/// assert_eq!(page.limit, 25);
/// ```
pub struct Courier {
    engine: Arc<Engine>,

    /// Tracking operations
    pub trackings: Trackings,

    /// Vote operations
    pub votes: Votes,

    /// Aggregate statistics
    pub dashboard: Dashboard,
}

impl Courier {
    /// Create an empty engine with default settings.
    ///
    /// Nothing touches the disk and all data is lost when dropped.
    pub fn ephemeral() -> Result<Self> {
        Self::builder().open()
    }

    /// Create a builder for engine configuration.
    pub fn builder() -> CourierBuilder {
        CourierBuilder::new()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }

    /// A command executor sharing this engine.
    pub fn executor(&self) -> Executor {
        Executor::new(self.engine.clone())
    }

    /// A session acting as `user`.
    pub fn session(&self, user: impl Into<UserId>) -> Session {
        Session::new(self.engine.clone(), user.into())
    }

    fn from_engine(engine: Arc<Engine>) -> Self {
        Self {
            trackings: Trackings::new(engine.clone()),
            votes: Votes::new(engine.clone()),
            dashboard: Dashboard::new(engine.clone()),
            engine,
        }
    }
}

/// Where initial records come from.
enum Seed {
    Empty,
    File(PathBuf),
    Fixture(Fixture),
}

/// Builder for [`Courier`].
///
/// # Example
///
/// ```ignore
/// // Seed from a JSON document on disk
/// let db = Courier::builder().seed_file("./trackings.json").open()?;
///
/// // Seed from records built in code
/// let db = Courier::builder().seed(Fixture { trackings, votes }).open()?;
///
/// // Empty, with a smaller default page
/// let db = Courier::builder().default_limit(5).open()?;
/// ```
pub struct CourierBuilder {
    config: EngineConfig,
    seed: Seed,
}

impl CourierBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            seed: Seed::Empty,
        }
    }

    /// Page size used when a query leaves `limit` unset or zero.
    ///
    /// Zero is ignored.
    pub fn default_limit(mut self, limit: u32) -> Self {
        self.config = self.config.with_default_limit(limit);
        self
    }

    /// Replace the whole engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load initial records from a fixture file when opening.
    pub fn seed_file(mut self, path: impl AsRef<Path>) -> Self {
        self.seed = Seed::File(path.as_ref().to_path_buf());
        self
    }

    /// Start from these records.
    pub fn seed(mut self, fixture: Fixture) -> Self {
        self.seed = Seed::Fixture(fixture);
        self
    }

    /// Open the engine.
    ///
    /// Fails with `Unavailable` if the seed file cannot be read, and with
    /// `Validation` or `Conflict` if its records are malformed or duplicated.
    pub fn open(self) -> Result<Courier> {
        let store = match self.seed {
            Seed::Empty => InMemoryStore::new(),
            Seed::File(path) => Fixture::load(&path)?.into_store()?,
            Seed::Fixture(fixture) => fixture.into_store()?,
        };
        let engine = Engine::open(Arc::new(store), self.config)?;

        info!(
            trackings = engine.store().tracking_count()?,
            default_limit = engine.config().default_limit,
            "Opened courier"
        );
        Ok(Courier::from_engine(Arc::new(engine)))
    }
}

impl Default for CourierBuilder {
    fn default() -> Self {
        Self::new()
    }
}
