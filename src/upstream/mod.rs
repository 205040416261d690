//! Upstream form submission.
//!
//! The delivery-zone tool only exposes an HTML form. Each lookup becomes one
//! url-encoded POST; the raw HTML answer is handed back for classification.
//! There is no retry and no caching: a failure is reported once as
//! `UpstreamUnavailable` and the caller decides whether to ask again.

mod request;

use std::future::Future;
use std::sync::Arc;

use log::{debug, trace, warn};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, REFERER};
use url::Url;

use crate::config::{Config, ACCEPT_HTML, ACCEPT_LANGUAGE_ES_MX, MAX_HTML_PREVIEW_CHARS};
use crate::error_handling::{categorize_reqwest_error, InitializationError, UpstreamUnavailable};
use crate::initialization::init_client;
use crate::models::QueryRequest;

pub use request::form_fields;

/// Something that can submit a lookup form and return the HTML answer.
///
/// [`UpstreamClient`] is the production implementation; tests substitute
/// in-memory fakes.
pub trait FormSubmitter: Send + Sync {
    /// Submits `request` and returns the response body.
    ///
    /// Transport failures, timeouts and non-success statuses all surface as
    /// `UpstreamUnavailable`; the cause is logged, not returned.
    fn submit(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<String, UpstreamUnavailable>> + Send;
}

/// `reqwest`-backed client for the upstream lookup form.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Arc<reqwest::Client>,
    url: Url,
}

impl UpstreamClient {
    /// Wraps an already-configured HTTP client.
    pub fn new(client: Arc<reqwest::Client>, url: Url) -> Self {
        Self { client, url }
    }

    /// Builds the HTTP client from `config` and targets `config.upstream_url`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::new(client, config.upstream_url.clone()))
    }

    fn report_failure(&self, request: &QueryRequest, error: &reqwest::Error) -> UpstreamUnavailable {
        let kind = categorize_reqwest_error(error);
        warn!(
            "Upstream lookup failed for postal code {} ({}): {}",
            request.postal_code, kind, error
        );
        UpstreamUnavailable
    }
}

impl FormSubmitter for UpstreamClient {
    fn submit(
        &self,
        request: &QueryRequest,
    ) -> impl Future<Output = Result<String, UpstreamUnavailable>> + Send {
        async move {
            let fields = form_fields(request);

            let response = self
                .client
                .post(self.url.clone())
                .header(ACCEPT, ACCEPT_HTML)
                .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_ES_MX)
                .header(REFERER, self.url.as_str())
                .form(&fields)
                .send()
                .await
                .and_then(|response| response.error_for_status());

            let response = match response {
                Ok(response) => response,
                Err(e) => return Err(self.report_failure(request, &e)),
            };

            let status = response.status();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => return Err(self.report_failure(request, &e)),
            };

            debug!(
                "Upstream answered {} for postal code {} ({} bytes)",
                status,
                request.postal_code,
                body.len()
            );
            trace!(
                "Upstream body preview: {}",
                body.chars().take(MAX_HTML_PREVIEW_CHARS).collect::<String>()
            );

            Ok(body)
        }
    }
}
