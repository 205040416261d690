//! API request and response types.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::LookupError;

/// Query string of `GET /api/check-postal-code`.
///
/// Every field is optional so that a missing parameter reaches validation and
/// gets the JSON error body instead of axum's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PostalCodeParams {
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
}

/// Query string of `GET /api/check-with-colonia`.
#[derive(Debug, Default, Deserialize)]
pub struct ColoniaParams {
    #[serde(rename = "postalCode")]
    pub postal_code: Option<String>,
    pub colonia: Option<String>,
}

/// Body of every 4xx/5xx answer.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message for the frontend
    pub error: String,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
