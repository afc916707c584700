//! Core infrastructure for Custodia.
//!
//! This crate holds the pieces every Custodia application needs around the
//! registry itself:
//!
//! - [`TracingConfig`] - Logging setup via the `tracing` crate
//! - [`CoreError`] - Errors raised while loading infrastructure configuration
//!
//! # Example
//!
//! ```
//! use custodia_core::{LogLevel, TracingConfig, TracingFormat};
//!
//! let config = TracingConfig::from_json(r#"{ "level": "debug", "format": "compact" }"#)
//!     .unwrap();
//! assert_eq!(config.level, LogLevel::Debug);
//! assert_eq!(config.format, TracingFormat::Compact);
//! config.install();
//! ```

mod error;
mod tracing_config;

pub use error::CoreError;
pub use tracing_config::{LogLevel, TracingConfig, TracingFormat};
