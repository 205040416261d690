//! Configuration constants.
//!
//! This module defines the constants used throughout the relay, including the
//! upstream endpoint, timeouts, and server defaults.

/// Delivery-zone lookup form that answers reexpedición questions.
///
/// Overridable with `--upstream-url` / `UPSTREAM_URL` (used by the integration
/// tests to point at a mock server).
pub const DEFAULT_UPSTREAM_URL: &str = "https://frecuenciaentregasitecorecms.azurewebsites.net/";

/// Default listening port (overridden by `PORT`, as most PaaS hosts expect)
pub const DEFAULT_PORT: u16 = 3000;
/// Default bind address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

// Network operation timeouts
/// Total upstream request timeout in seconds.
/// A hung upstream must not pin a request task forever.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for upstream requests.
///
/// The upstream form rejects requests that do not look like they come from a
/// browser. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Form field names expected by the upstream form
/// Postal code field
pub const FORM_FIELD_POSTAL_CODE: &str = "cp";
/// Neighborhood field (empty on the first submission)
pub const FORM_FIELD_COLONIA: &str = "colonia";
/// State field (always empty)
pub const FORM_FIELD_STATE: &str = "estado";
/// Municipality field (always empty)
pub const FORM_FIELD_MUNICIPALITY: &str = "municipio";

// Markers in the upstream result heading
/// Heading text for postal codes delivered without forwarding
pub const MARKER_WITHOUT_REEXPEDITION: &str = "SIN REEXPEDICIÓN";
/// Heading text for postal codes that require forwarding
pub const MARKER_WITH_REEXPEDITION: &str = "CON REEXPEDICIÓN";

/// Name of the `<select>` control the upstream uses for neighborhood disambiguation
pub const COLONIA_CONTROL_NAME: &str = "colonia";

/// Maximum HTML preview length in characters for debug logging
pub const MAX_HTML_PREVIEW_CHARS: usize = 500;

/// Accepted postal code shape: exactly five ASCII digits.
/// `[0-9]` rather than `\d`, which would also accept non-ASCII digits.
pub const POSTAL_CODE_PATTERN: &str = r"^[0-9]{5}$";
