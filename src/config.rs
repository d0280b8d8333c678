//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to pick playlist
//! defaults (capacity, track line format) and helpers to load configuration
//! from disk and environment.

mod load;
mod schema;

pub use schema::*;
