//! Result envelope handed to callers of the service layer.
//!
//! Services return `Result<T>` internally; the presentation layer receives a
//! flat success/failure shape with no partial-success variant.

use serde::{Deserialize, Serialize};

/// Envelope for a service call outcome.
///
/// On success `data` is populated; on failure only `message` carries
/// information. Detailed error causes are logged at the service boundary,
/// not surfaced to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ServiceResponse<T> {
    /// Builds a success envelope carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Builds a failure envelope. No data is attached.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Collapses a service `Result` into the envelope, replacing the error
    /// detail with the caller-facing `err_message`.
    pub fn from_result(
        result: crate::Result<T>,
        ok_message: impl Into<String>,
        err_message: impl Into<String>,
    ) -> Self {
        match result {
            Ok(data) => Self::success(data, ok_message),
            Err(_) => Self::failure(err_message),
        }
    }
}
