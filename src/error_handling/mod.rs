//! Error handling.
//!
//! This module provides:
//! - Caller-facing error types (validation and upstream availability)
//! - Startup error types
//! - Categorization of transport failures for operator logs
//!
//! Error types are split by audience:
//! - **Caller errors**: `ValidationError` and `UpstreamUnavailable`, wrapped by
//!   `LookupError`. Their messages are safe to return to API clients.
//! - **Operator detail**: `UpstreamFailureKind`, only ever logged.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, UpstreamFailureKind};
pub use types::{InitializationError, LookupError, UpstreamUnavailable, ValidationError};
