//! Error types for the random number endpoint.
//!
//! Every variant is a client input error detected synchronously while handling
//! a single request. Each maps to exactly one HTTP status and JSON body via
//! [`IntoResponse`]:
//!
//! - `MethodNotAllowed`: anything other than `GET` (405).
//! - `MalformedPath`: the path does not follow the range grammar (400).
//! - `InvalidParameters`: the grammar matched but the values are inconsistent
//!   (400).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use biasrand::ParseError;
use serde::Serialize;

/// Unified error type for the random number endpoint.
///
/// The `Display` text is the exact message returned to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Only GET requests are allowed")]
    MethodNotAllowed,

    #[error("Invalid URL format. Use /random-min-<min>-average-<average>&<percentage>-max-<max>")]
    MalformedPath,

    #[error("Invalid parameters. Check min <= average <= max and percentage 0-100")]
    InvalidParameters,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedPath | Self::InvalidParameters => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        if err.is_malformed() {
            Self::MalformedPath
        } else {
            Self::InvalidParameters
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
