//! Error type definitions.
//!
//! This module defines the error types returned by lookups and by startup.

use axum::http::StatusCode;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Caller input rejected before any upstream call is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Postal code missing or not exactly five ASCII digits.
    #[error("Se requiere un código postal válido de 5 dígitos.")]
    InvalidPostalCode,

    /// Colonia missing or blank.
    #[error("Se requiere una colonia válida.")]
    InvalidColonia,
}

/// The upstream form could not be reached or answered with a failure.
///
/// Carries no cause. The transport error is logged where it happens and
/// never handed to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No se pudo conectar con el servicio de Estafeta.")]
pub struct UpstreamUnavailable;

/// Everything a lookup can fail with.
///
/// Classification itself never fails; an unrecognized page is a successful
/// lookup with an `Unknown` outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Caller input failed format/presence checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upstream service failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamUnavailable),
}

impl LookupError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::Validation(_) => StatusCode::BAD_REQUEST,
            LookupError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns `true` if the caller's input was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, LookupError::Validation(_))
    }
}
