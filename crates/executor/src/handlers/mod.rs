//! Command handlers, one module per area

pub mod health;
pub mod summary;
pub mod tracking;
pub mod vote;
