use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The request itself was unusable (body or path could not be parsed).
    /// `status` is whatever the rejecting extractor chose.
    #[error("{message}")]
    Validation { status: StatusCode, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    /// The database could not be reached in time.
    #[error("{message}")]
    Connectivity {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ServerError {
    /// Classify a storage failure. `message` is what the caller sees; the
    /// cause only goes to the log.
    pub fn storage(message: &'static str, source: anyhow::Error) -> Self {
        let unreachable = matches!(
            source.downcast_ref::<sqlx::Error>(),
            Some(
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::WorkerCrashed
            )
        );
        if unreachable {
            Self::Connectivity { message, source }
        } else {
            Self::Internal { message, source }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Connectivity { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::Connectivity { message, source }
            | Self::Internal { message, source } => {
                tracing::error!(error = ?source, "{message}");
            }
            Self::Validation { message: msg, .. }
            | Self::NotFound(msg)
            | Self::MethodNotAllowed(msg) => {
                tracing::debug!("rejected request: {msg}");
            }
        }
        (self.status(), Json(json!({ "error": self.to_string() })))
            .into_response()
    }
}
