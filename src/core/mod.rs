//! Core module for `GpaTracker`
//!
//! Owns the grading engine, the fixed scales, the record model, persistence,
//! and configuration.

pub mod config;
pub mod engine;
pub mod models;
pub mod scales;
pub mod store;

/// Returns the current version of the `GpaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
