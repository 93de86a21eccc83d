//! Typed error hierarchy for the atelier client.
//!
//! Two top-level enums cover the two failure domains:
//! - `ValidationError` — malformed user input, caught before any network call
//! - `ApiError` — transport, service, and response-shape failures
//!
//! Every variant is recovered at a controller or command boundary and
//! surfaced as a user-visible notification; nothing here crashes the
//! process and nothing is retried automatically.

use thiserror::Error;

/// Errors from request builders. A request that fails validation never
/// reaches the network layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project description cannot be empty")]
    EmptyDescription,

    #[error("Figma URL cannot be empty")]
    EmptyUrl,

    #[error("Not a valid Figma file URL: {url}")]
    MalformedFigmaUrl { url: String },
}

/// Errors from the backend REST surface.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connectivity failure — the request never produced a well-formed
    /// response.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered, but reported failure (`success: false` or an
    /// HTTP error status with a detail message).
    #[error("Service error: {0}")]
    Service(String),

    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}
