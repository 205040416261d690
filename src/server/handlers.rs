//! API HTTP handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use log::debug;

use super::types::{ColoniaParams, HealthResponse, PostalCodeParams};
use crate::classify::ClassificationOutcome;
use crate::error_handling::LookupError;
use crate::lookup::LookupService;
use crate::upstream::FormSubmitter;

/// `GET /api/check-postal-code?postalCode=NNNNN`
pub async fn check_postal_code<S: FormSubmitter + 'static>(
    State(service): State<Arc<LookupService<S>>>,
    params: Result<Query<PostalCodeParams>, QueryRejection>,
) -> Result<Json<ClassificationOutcome>, LookupError> {
    let params = params.map(|Query(p)| p).unwrap_or_else(|rejection| {
        debug!("Unparseable query string: {}", rejection);
        PostalCodeParams::default()
    });
    let postal_code = params.postal_code.unwrap_or_default();

    service.initial_lookup(&postal_code).await.map(Json)
}

/// `GET /api/check-with-colonia?postalCode=NNNNN&colonia=...`
pub async fn check_with_colonia<S: FormSubmitter + 'static>(
    State(service): State<Arc<LookupService<S>>>,
    params: Result<Query<ColoniaParams>, QueryRejection>,
) -> Result<Json<ClassificationOutcome>, LookupError> {
    let params = params.map(|Query(p)| p).unwrap_or_else(|rejection| {
        debug!("Unparseable query string: {}", rejection);
        ColoniaParams::default()
    });
    let postal_code = params.postal_code.unwrap_or_default();
    let colonia = params.colonia.unwrap_or_default();

    service
        .lookup_with_colonia(&postal_code, &colonia)
        .await
        .map(Json)
}

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
