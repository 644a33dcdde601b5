//! Weft configuration - build configuration for the Weft utility CSS generator
//!
//! This crate owns the configuration boundary of the generator: it parses a
//! `weft.toml` (or `.json`) declaration into an immutable [`BuildConfig`]
//! record that the scanner and CSS emitter read for the duration of a build
//! or watch session.

pub mod config;
pub mod types;

pub use config::{discover, load, BuildConfig, Fingerprint, Theme};
pub use types::ConfigError;
