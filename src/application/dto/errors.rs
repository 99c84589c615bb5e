use crate::application::error::{ApplicationError, ErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Per-field validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, Vec<String>>>,
}

/// `{ "error": { "code": ..., "message": ..., "details"?: ... } }` envelope
/// returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl ErrorBody {
    /// Internal failures are logged and replaced by `fallback_message` so
    /// storage details never reach the client.
    pub fn from_error(err: &ApplicationError, fallback_message: &str) -> Self {
        let kind = err.kind();
        let message = if kind == ErrorKind::Internal {
            tracing::error!(error = %err, "request failed");
            fallback_message.to_string()
        } else {
            tracing::debug!(error = %err, code = kind.code(), "request rejected");
            err.to_string()
        };
        Self {
            error: ErrorDetail {
                code: kind.code().to_string(),
                message,
                details: None,
            },
        }
    }

    #[must_use]
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.error
            .details
            .get_or_insert_with(BTreeMap::new)
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }
}
