//! The engines wired to one store
//!
//! ```ignore
//! use courier_engine::{Engine, EngineConfig};
//! use courier_core::{NewTracking, TrackingQuery, UserId};
//!
//! let engine = Engine::ephemeral()?;
//! let user = UserId::from("u1");
//! engine.create_tracking(&user, NewTracking::new("Pkg A", 50.0))?;
//! let page = engine.list_trackings(&TrackingQuery::new())?;
//! ```

use crate::config::EngineConfig;
use crate::mutation::MutationEngine;
use crate::query::QueryEngine;
use crate::summary::SummaryAggregator;
use courier_core::{
    NewTracking, Result, Tracking, TrackingId, TrackingPage, TrackingPatch, TrackingQuery,
    TrackingStatus, TrackingSummary, UserId, Vote, VoteRequest,
};
use courier_storage::{InMemoryStore, RecordStore};
use std::sync::Arc;
use tracing::debug;

/// Query, mutation and summary engines sharing one record store
///
/// Created once at startup and shared (`Arc<Engine>`) by every request.
pub struct Engine {
    store: Arc<dyn RecordStore>,
    config: EngineConfig,
    query: QueryEngine,
    mutation: MutationEngine,
    summary: SummaryAggregator,
}

impl Engine {
    /// Wire engines to an existing store
    pub fn open(store: Arc<dyn RecordStore>, config: EngineConfig) -> Result<Self> {
        let mutation = MutationEngine::new(store.clone());
        debug!(
            next_id = mutation.last_id()? + 1,
            default_limit = config.default_limit,
            "Opened engine"
        );
        Ok(Self {
            query: QueryEngine::new(store.clone(), config.clone()),
            summary: SummaryAggregator::new(store.clone()),
            mutation,
            store,
            config,
        })
    }

    /// Engine over a fresh, empty in-memory store
    pub fn ephemeral() -> Result<Self> {
        Self::open(Arc::new(InMemoryStore::new()), EngineConfig::default())
    }

    /// The shared store
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// See [`QueryEngine::list`]
    pub fn list_trackings(&self, query: &TrackingQuery) -> Result<TrackingPage> {
        self.query.list(query)
    }

    /// See [`QueryEngine::statuses`]
    pub fn list_statuses(&self) -> Result<Vec<TrackingStatus>> {
        self.query.statuses()
    }

    /// See [`MutationEngine::create`]
    pub fn create_tracking(&self, user_id: &UserId, request: NewTracking) -> Result<Tracking> {
        self.mutation.create(user_id, request)
    }

    /// See [`MutationEngine::vote`]
    pub fn vote_tracking(
        &self,
        user_id: &UserId,
        tracking_id: &TrackingId,
        request: &VoteRequest,
    ) -> Result<Vote> {
        self.mutation.vote(user_id, tracking_id, request)
    }

    /// See [`MutationEngine::update`]
    pub fn update_tracking(
        &self,
        user_id: &UserId,
        tracking_id: &TrackingId,
        patch: &TrackingPatch,
    ) -> Result<Tracking> {
        self.mutation.update(user_id, tracking_id, patch)
    }

    /// See [`SummaryAggregator::summary`]
    pub fn tracking_summary(&self) -> Result<TrackingSummary> {
        self.summary.summary()
    }
}
