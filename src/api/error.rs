//! Mapping from handler failures to HTTP responses.
//!
//! Every error answers with `{"error":"<reason phrase>"}` and
//! `Content-Type: application/json`. Server-side detail is logged, never sent.

use tracing::{debug, error};

use crate::contact::DecodeError;
use crate::method::Method;
use crate::response::{IntoResponse, Response};
use crate::status::Status;
use crate::store::StoreError;
use crate::templates::TemplateError;

/// Convenient result alias for API handlers.
pub type ApiResult = Result<Response, ApiError>;

/// Why a request could not be served.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("method {actual} not allowed, expected {expected}")]
    MethodNotAllowed { expected: Method, actual: String },
    #[error(transparent)]
    BadBody(#[from] DecodeError),
    #[error("resource not found")]
    NotFound,
    /// An `id` that should have been an integer, on an endpoint that reports
    /// it as a server fault.
    #[error("invalid contact id {0:?}")]
    InvalidId(Option<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::MethodNotAllowed { .. } => Status::MethodNotAllowed,
            Self::BadBody(_) => Status::BadRequest,
            Self::NotFound | Self::Store(StoreError::NoRecord) => Status::NotFound,
            Self::InvalidId(_)
            | Self::Store(StoreError::Other(_))
            | Self::Template(_)
            | Self::Encode(_) => Status::InternalServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::MethodNotAllowed { expected, .. } => {
                return client_error(status).with_header("allow", expected.as_str());
            }
            _ if status == Status::InternalServerError => return server_error(&self),
            _ => debug!(error = %self, status = status.code(), "request rejected"),
        }
        client_error(status)
    }
}

/// Logs `err` and answers `500` without exposing it.
pub fn server_error(err: &dyn std::error::Error) -> Response {
    error!(error = %err, "internal server error");
    Response::error(Status::InternalServerError)
}

/// Answers with a bare client error for `status`.
pub fn client_error(status: Status) -> Response {
    Response::error(status)
}
