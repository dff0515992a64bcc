use serde::{Deserialize, Serialize};

/// Response envelope emitted by every endpoint of the next-go-template API.
///
/// Success responses carry `success: true` and usually a `data` payload;
/// error responses carry `success: false` and a human-readable `error`
/// message. The server omits whichever field does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("API reported failure: {0}")]
    Failure(String),
    #[error("success envelope carried no data")]
    MissingData,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning a `success: false` envelope into the
    /// server-reported message and a bodiless success into [`EnvelopeError::MissingData`].
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Failure(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}
