//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (upstream endpoint, timeouts, defaults)
//! - Outbound HTTP header constants
//! - CLI/environment option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
