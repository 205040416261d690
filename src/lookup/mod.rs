//! Lookup orchestration.
//!
//! The two public operations behind the API: an initial lookup by postal
//! code, and a follow-up lookup once the caller has picked a colonia from a
//! `ColoniaRequired` answer. Each call validates its input, submits the form
//! once and classifies the HTML. Nothing is remembered between calls, so the
//! follow-up is not checked against any earlier answer.

use log::{debug, info};

use crate::classify::{classify, ClassificationOutcome};
use crate::error_handling::LookupError;
use crate::models::{ColoniaName, PostalCode, QueryRequest};
use crate::upstream::FormSubmitter;

/// Validates lookups and drives them through the upstream form.
pub struct LookupService<S> {
    submitter: S,
}

impl<S: FormSubmitter> LookupService<S> {
    /// Creates a service that submits through `submitter`.
    pub fn new(submitter: S) -> Self {
        Self { submitter }
    }

    /// First step: look up a postal code on its own.
    ///
    /// # Errors
    ///
    /// - `LookupError::Validation` if `postal_code` is not five ASCII digits
    ///   (no upstream call is made)
    /// - `LookupError::Upstream` if the upstream form could not be reached
    pub async fn initial_lookup(
        &self,
        postal_code: &str,
    ) -> Result<ClassificationOutcome, LookupError> {
        let postal_code = PostalCode::parse(postal_code).inspect_err(|e| {
            debug!("Rejected initial lookup for {:?}: {}", postal_code, e);
        })?;
        self.run(QueryRequest::initial(postal_code)).await
    }

    /// Second step: look up a postal code together with a colonia.
    ///
    /// Any non-blank colonia is accepted, even one the upstream never offered;
    /// the result is whatever the upstream answers.
    ///
    /// # Errors
    ///
    /// - `LookupError::Validation` if `postal_code` is not five ASCII digits or
    ///   `colonia` is blank (no upstream call is made)
    /// - `LookupError::Upstream` if the upstream form could not be reached
    pub async fn lookup_with_colonia(
        &self,
        postal_code: &str,
        colonia: &str,
    ) -> Result<ClassificationOutcome, LookupError> {
        let postal_code = PostalCode::parse(postal_code).inspect_err(|e| {
            debug!("Rejected colonia lookup for {:?}: {}", postal_code, e);
        })?;
        let colonia = ColoniaName::parse(colonia).inspect_err(|e| {
            debug!("Rejected colonia lookup for {}: {}", postal_code, e);
        })?;
        self.run(QueryRequest::with_colonia(postal_code, colonia))
            .await
    }

    async fn run(&self, request: QueryRequest) -> Result<ClassificationOutcome, LookupError> {
        let html = self.submitter.submit(&request).await?;
        let outcome = classify(&html);

        match &outcome {
            ClassificationOutcome::Unknown {} => info!(
                "Unrecognized upstream page for postal code {} ({} bytes)",
                request.postal_code,
                html.len()
            ),
            _ => debug!(
                "Lookup for postal code {} (colonia: {}) classified as {}",
                request.postal_code,
                request.colonia.is_some(),
                outcome.status()
            ),
        }

        Ok(outcome)
    }
}
