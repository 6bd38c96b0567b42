//! Facebook API error details

use serde::Deserialize;

/// Structured error information from a Graph API error envelope.
///
/// Facebook reports failures as `{"error": {"message": ..., "type": ..., "code": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FacebookErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// The error type (e.g., "OAuthException").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Numeric error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Numeric error subcode.
    #[serde(rename = "error_subcode", default)]
    pub subcode: Option<i64>,
}

impl FacebookErrorDetail {
    /// Creates a new error detail with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            code: None,
            subcode: None,
        }
    }

    /// Sets the error code.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the error type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Returns `true` if Facebook reported a throttling code.
    ///
    /// Codes 4, 17, 32 and 613 are the application/user/page rate limits.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self.code, Some(4 | 17 | 32 | 613))
    }
}

impl std::fmt::Display for FacebookErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, self.code) {
            (Some(kind), Some(code)) => write!(f, "[{} #{}] {}", kind, code, self.message),
            (Some(kind), None) => write!(f, "[{}] {}", kind, self.message),
            (None, Some(code)) => write!(f, "[#{}] {}", code, self.message),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}
