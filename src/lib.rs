#![deny(missing_docs)]

//! Core library for the docmd conversion server.

/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Document-to-Markdown converter bindings.
pub mod convert;
/// Static supported-format catalog.
pub mod formats;
/// Structured logging and tracing setup.
pub mod logging;
/// Upload staging and conversion pipeline.
pub mod upload;
