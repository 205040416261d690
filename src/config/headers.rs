//! Outbound HTTP header constants.
//!
//! The upstream form only answers requests carrying a plausible browser
//! identity. `User-Agent` is set on the client itself (see
//! `initialization::init_client`); the remaining headers are attached per
//! request.

/// Accept header sent with every upstream submission
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
/// Accept-Language header sent with every upstream submission
pub const ACCEPT_LANGUAGE_ES_MX: &str = "es-MX,es;q=0.9,en;q=0.8";
