use thiserror::Error;

use crate::http_client::{HttpError, ResponseBody};

/// Validation errors for domain values decoded from the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("unknown country code '{value}', expected US or CAN")]
    InvalidCountry { value: String },
}

/// Top-level error type for client operations.
///
/// `Transport` carries the transport's own failure unreinterpreted; `Http`
/// marks a completed exchange whose status was outside the 2xx range and
/// keeps the decoded body for diagnostics.
#[derive(Debug, Error)]
pub enum IftaError {
    /// Construction-time failure: no usable transport. The client cannot be
    /// used; no request was attempted.
    #[error("transport configuration failed: {0}")]
    Configuration(String),

    /// A required argument was empty. Checked before any network activity.
    #[error("required argument '{name}' is empty")]
    InvalidArgument { name: &'static str },

    /// The server answered with a non-success status. The body is the
    /// decoded payload (structured JSON or raw text) as the server sent it.
    #[error("request failed with status {status}")]
    Http {
        status: u16,
        status_text: String,
        body: ResponseBody,
    },

    /// The transport itself failed (connect, timeout, body read).
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response body could not be decoded into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl IftaError {
    /// Status code of an `Http` error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
