//! Error taxonomy for the SmartScout client.

use std::time::Duration;
use thiserror::Error;

/// Result alias used throughout the client core.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the client. Every failure reaches the caller as one of
/// these; nothing is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A request or response value does not satisfy its schema.
    #[error("schema validation failed for {schema}: {message}")]
    SchemaValidation { schema: String, message: String },

    /// HTTP 401 from the remote service.
    #[error("authentication failed: invalid API key or insufficient permissions")]
    Authentication,

    /// HTTP 429 from the remote service.
    #[error("rate limit exceeded{}", .retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default())]
    RateLimit { retry_after: Option<u64> },

    /// Any other non-2xx status, a transport failure, or an unparseable body.
    #[error("remote API error{}: {detail}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    RemoteApi {
        status: Option<u16>,
        detail: String,
        /// Configured limit, set when the request ran out of time.
        timeout: Option<Duration>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The client could not be constructed.
    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn schema(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Error::SchemaValidation { schema: schema.into(), message: message.into() }
    }

    pub(crate) fn status(status: u16, detail: impl Into<String>) -> Self {
        Error::RemoteApi { status: Some(status), detail: detail.into(), timeout: None, source: None }
    }

    /// A non-2xx response whose body could not be read.
    pub(crate) fn status_unreadable(
        status: u16,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::RemoteApi {
            status: Some(status),
            detail: "failed to read response body".to_string(),
            timeout: None,
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn transport(
        detail: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::RemoteApi { status: None, detail: detail.into(), timeout: None, source: Some(Box::new(source)) }
    }

    pub(crate) fn timed_out(
        detail: impl Into<String>,
        timeout: Duration,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::RemoteApi {
            status: None,
            detail: detail.into(),
            timeout: Some(timeout),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the request exceeded the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::RemoteApi { timeout: Some(_), .. })
    }

    /// HTTP status associated with this error, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Error::Authentication => Some(401),
            Error::RateLimit { .. } => Some(429),
            Error::RemoteApi { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether a caller-side retry could reasonably succeed.
    ///
    /// Rate limits, 5xx responses and transport failures qualify. Schema,
    /// authentication and other 4xx errors need a different input first.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimit { .. } => true,
            Error::RemoteApi { status: None, .. } => true,
            Error::RemoteApi { status: Some(s), .. } => *s >= 500,
            _ => false,
        }
    }
}
