//! Persisted configuration
//!
//! The settings record and the stores it can live in.

pub mod settings;
pub mod store;
