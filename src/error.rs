use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum MapsError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl MapsError {
    fn status(&self) -> StatusCode {
        match self {
            MapsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            MapsError::Configuration(_) | MapsError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message rendered to the client. Upstream detail must be sanitized
    /// by the handler before it reaches here; nothing provider-internal (and
    /// never the API key) is allowed into a response body.
    fn message(&self) -> &str {
        match self {
            MapsError::InvalidRequest(m)
            | MapsError::Configuration(m)
            | MapsError::Upstream(m) => m,
        }
    }
}

impl IntoResponse for MapsError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        (status, Json(serde_json::json!({ "error": self.message() }))).into_response()
    }
}

// Alias for Result to simplify usage
pub type MapsResult<T> = Result<T, MapsError>;
