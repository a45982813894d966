//! HTTP handler for the random number endpoint.
//!
//! The handler is installed as the router fallback so that every path and
//! method reaches it; it performs its own method check and path parsing in
//! that order.

use crate::server::error::Error;
use axum::{
    Json,
    http::{Method, Uri},
};
use biasrand::{SampleBatch, generate, parse};
use serde::Serialize;

/// Successful response body: `{"randomNumbers": [..]}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomNumbers {
    pub random_numbers: SampleBatch,
}

/// Handles `GET /random-min-<min>-average-<average>&<percentage>-max-<max>`.
///
/// Only the path component of the URI is parsed; any query string is
/// ignored.
pub async fn random_numbers(method: Method, uri: Uri) -> Result<Json<RandomNumbers>, Error> {
    if method != Method::GET {
        tracing::debug!(%method, "rejecting non-GET request");
        return Err(Error::MethodNotAllowed);
    }

    let spec = parse(uri.path()).map_err(|e| {
        tracing::debug!(path = uri.path(), error = %e, "rejecting request");
        Error::from(e)
    })?;

    let random_numbers = generate(&spec);
    tracing::debug!(%spec, ?random_numbers, "generated batch");

    Ok(Json(RandomNumbers { random_numbers }))
}
