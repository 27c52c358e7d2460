//! Registry Errors
//!
//! The domain error taxonomy and its mapping to HTTP responses. Every
//! rejection becomes a 404 or 400 with a `{"error": "..."}` body; nothing is
//! retried and nothing is fatal to the process.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No record carries the requested code.
    #[error("no person with code {0}")]
    NotFound(u64),

    /// A region lookup matched nothing. An empty match is reported as an
    /// error rather than an empty 200, for compatibility with existing
    /// consumers of the API.
    #[error("no person registered for region {0}")]
    NoRegionMatch(String),

    /// One of the required text fields was empty.
    #[error("name, national id and region are required fields")]
    MissingFields,

    /// Another record already carries the same case-insensitive
    /// (name, national id, region) triple.
    #[error("a person with the same name, national id and region already exists")]
    Duplicate,
}

impl RegistryError {
    pub fn status(&self) -> StatusCode {
        match self {
            RegistryError::NotFound(_) | RegistryError::NoRegionMatch(_) => StatusCode::NOT_FOUND,
            RegistryError::MissingFields | RegistryError::Duplicate => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        tracing::debug!("Request rejected: {}", self);
        (
            self.status(),
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
