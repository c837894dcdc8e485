use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Shown alongside provider failures; both providers need outbound internet access.
pub const NETWORK_HINT: &str =
    "Make sure you have an internet connection. Speech synthesis requires network access.";

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Text too large: {0}")]
    PayloadTooLarge(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    /// Any of the above, plus warnings raised earlier in the same request
    #[error("{error}")]
    WithWarnings {
        error: Box<AppError>,
        warnings: Vec<String>,
    },
}

/// Error response structure - message plus an optional remediation hint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ExternalService(_) => StatusCode::BAD_GATEWAY,
            Self::WithWarnings { error, .. } => error.status_code(),
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ExternalService(_) => Some(NETWORK_HINT),
            Self::WithWarnings { error, .. } => error.hint(),
            _ => None,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
            hint: self.hint().map(str::to_string),
            warnings: match self {
                Self::WithWarnings { warnings, .. } => warnings.clone(),
                _ => Vec::new(),
            },
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = %status.as_u16(), "Request rejected");
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
