//! reexpedicion_relay library: postal-code reexpedición lookups as a JSON API
//!
//! The upstream delivery-zone tool only speaks HTML forms. This library submits
//! the form, classifies the HTML it gets back, and exposes the result as JSON:
//!
//! - a definitive answer (`RESULT_FOUND`, with or without reexpedición),
//! - a request to pick a colonia and ask again (`COLONIA_REQUIRED`),
//! - or an unrecognized page (`UNKNOWN_RESULT`).
//!
//! # Example
//!
//! ```no_run
//! use reexpedicion_relay::{Config, LookupService, UpstreamClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let service = LookupService::new(UpstreamClient::from_config(&config)?);
//!
//! let outcome = service.initial_lookup("01000").await?;
//! println!("{}", serde_json::to_string(&outcome)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod classify;
pub mod config;
mod error_handling;
pub mod initialization;
mod lookup;
mod models;
mod server;
mod upstream;
mod utils;

// Re-export public API
pub use classify::{classify, ClassificationOutcome};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    categorize_reqwest_error, InitializationError, LookupError, UpstreamFailureKind,
    UpstreamUnavailable, ValidationError,
};
pub use lookup::LookupService;
pub use models::{ColoniaName, PostalCode, QueryRequest};
pub use server::{
    cancel_on_shutdown_signal, router, run_server, serve, ErrorResponse, HealthResponse,
};
pub use upstream::{form_fields, FormSubmitter, UpstreamClient};
