//! Transport error types

use super::FacebookErrorDetail;

/// Errors reported by an [`FqlTransport`](crate::FqlTransport) or while
/// interpreting its response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Facebook returned an error envelope.
    #[error("Facebook API error: {0}")]
    Api(FacebookErrorDetail),

    /// The response body was not a usable FQL result.
    #[error("Response parse error: {message}")]
    Parse {
        /// What was wrong with the body.
        message: String,
        /// The offending JSON, if available.
        body: Option<String>,
    },

    /// Any other transport failure.
    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Builds an [`Http`](TransportError::Http) error for transport implementations.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    pub(crate) fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the Facebook error detail if available.
    pub fn facebook_detail(&self) -> Option<&FacebookErrorDetail> {
        match self {
            Self::Api(detail) => Some(detail),
            _ => None,
        }
    }

    /// Returns `true` for throttling and server-side failures.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Api(detail) => detail.is_rate_limit(),
            Self::Parse { .. } | Self::Other(_) => false,
        }
    }
}
