//! Shared configuration, error handling, and extractors for Clarity
//!
//! This crate provides common functionality used across the Clarity
//! application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors

pub mod config;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
