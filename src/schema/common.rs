use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Body of every error response.
#[derive(Object, Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Logs a failure that the caller cannot act on and wraps its text.
    pub fn internal(module: &str, function: &str, process: &str, err: &str) -> Self {
        error!("{}.{} failed on {}: {}", module, function, process, err);
        Self::new(err)
    }
}
