use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::null_default;

use super::transport::TransportError;

/// Error body returned by the service on any non-200 status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} ({status_code})")]
pub struct ApiError {
    #[serde(rename = "statusCode", default, deserialize_with = "null_default")]
    pub status_code: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] TransportError),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SummarizerError {
    /// The API error payload, if the service answered with a failure status
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SummarizerError::Api(err) => Some(err),
            _ => None,
        }
    }
}
