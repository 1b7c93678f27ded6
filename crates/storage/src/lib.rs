//! Storage layer for Courier
//!
//! This crate implements the record store behind the engines:
//! - [`RecordStore`]: the repository trait engines are written against
//! - [`InMemoryStore`]: insertion-ordered tables behind a single RwLock
//! - [`IdAllocator`]: monotonic tracking id counter held by the store
//! - [`Fixture`]: JSON document used to seed a store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod fixture;
pub mod id;
pub mod memory;
pub mod traits;

pub use fixture::Fixture;
pub use id::IdAllocator;
pub use memory::InMemoryStore;
pub use traits::RecordStore;
