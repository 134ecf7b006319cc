//! Error types for the kitchen front end.
//!
//! Pipeline errors live in [`crate::agents::error`] and configuration errors
//! in [`crate::pipeline::config`]; this module covers the catalog file and the
//! HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::agents::AgentError;

/// Message shown to users when the chef cannot produce a dish.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Sorry, the AI chef could not create a menu right now. Try adjusting your order.";

/// Errors that can occur while loading the kitchen catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read kitchen catalog '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid kitchen catalog: {0}")]
    Invalid(String),
}

/// Errors returned by the kitchen server handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The pipeline failed while cooking.
    #[error("Chef pipeline failed: {0}")]
    Pipeline(#[from] AgentError),

    /// A page template failed to render.
    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),

    /// The request could not be understood.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ServerError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Pipeline(_) | ServerError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message that is safe to show to the user.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::Pipeline(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            ServerError::Render(_) => "Internal server error".to_string(),
            ServerError::BadRequest(reason) => reason.clone(),
        }
    }
}

/// Error body returned by every JSON endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
