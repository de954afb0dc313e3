//! The uniform JSON response envelope.
//!
//! Every endpoint wraps its payload in `{ success, data, count?, error? }`.
//! Successful responses carry `data` (and `count` for list payloads); error
//! responses carry `error` and omit `data`.

use serde::Serialize;

/// Response wrapper shared by all endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    /// Whether the request was served successfully.
    pub success: bool,
    /// The payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Element count for list payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Human-readable error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// A successful envelope around `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            error: None,
        }
    }

    /// A successful envelope around a list payload with its length.
    #[must_use]
    pub fn ok_with_count(data: T, count: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: Some(count),
            error: None,
        }
    }
}

impl Envelope<()> {
    /// A failed envelope carrying only an error message.
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(message.into()),
        }
    }
}
