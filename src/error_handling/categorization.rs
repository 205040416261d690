//! Transport failure categorization.
//!
//! Turns a `reqwest::Error` into a short category for operator logs.
//! Callers never see these; they only get `UpstreamUnavailable`.

use std::fmt;

/// Coarse category of an upstream transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailureKind {
    /// Request exceeded the configured timeout
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// Upstream answered with a non-success status code
    Status(u16),
    /// Response body could not be read or decoded
    Body,
    /// Request could not be built or sent
    Request,
    /// Anything else
    Other,
}

impl fmt::Display for UpstreamFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamFailureKind::Timeout => write!(f, "timeout"),
            UpstreamFailureKind::Connect => write!(f, "connect"),
            UpstreamFailureKind::Status(code) => write!(f, "status {code}"),
            UpstreamFailureKind::Body => write!(f, "body"),
            UpstreamFailureKind::Request => write!(f, "request"),
            UpstreamFailureKind::Other => write!(f, "other"),
        }
    }
}

/// Categorizes a `reqwest::Error` into an `UpstreamFailureKind`.
///
/// Status codes are checked first (set by `error_for_status`), then the
/// reqwest error kind. Timeouts are checked before connect errors because a
/// connect timeout reports both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> UpstreamFailureKind {
    if let Some(status) = error.status() {
        return UpstreamFailureKind::Status(status.as_u16());
    }

    if error.is_timeout() {
        UpstreamFailureKind::Timeout
    } else if error.is_connect() {
        UpstreamFailureKind::Connect
    } else if error.is_body() || error.is_decode() {
        UpstreamFailureKind::Body
    } else if error.is_builder() || error.is_request() || error.is_redirect() {
        UpstreamFailureKind::Request
    } else {
        UpstreamFailureKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_display_is_short_and_stable() {
        assert_eq!(UpstreamFailureKind::Timeout.to_string(), "timeout");
        assert_eq!(UpstreamFailureKind::Status(503).to_string(), "status 503");
        assert_eq!(UpstreamFailureKind::Other.to_string(), "other");
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect() {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let err = client
            .post("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("nothing listens on port 1");
        assert_eq!(categorize_reqwest_error(&err), UpstreamFailureKind::Connect);
    }

    #[test]
    fn test_invalid_url_is_request_or_builder() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("URL should be rejected");
        assert_eq!(categorize_reqwest_error(&err), UpstreamFailureKind::Request);
    }
}
