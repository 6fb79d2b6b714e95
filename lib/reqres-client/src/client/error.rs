use std::fmt::Debug;

use super::AuthenticationError;
use super::response::Output;

/// Errors that can occur when using the [`ReqResClient`](super::ReqResClient).
///
/// Only transport-level failures live here. An API validation error such as
/// `400 {"error": "Missing password"}` is a regular value, see [`Reply`](super::Reply).
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when the network is unreachable or the connection fails.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// Credentials cannot be turned into a request header.
    AuthenticationError(AuthenticationError),

    /// JSON serialization error for a request body.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// Invalid base URL configuration.
    #[display("Invalid base URL '{url}': {error}")]
    #[from(skip)]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Description of why the URL is invalid.
        error: String,
    },

    /// The response body does not match the declared shape.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// JSON path of the first mismatch.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Response output type is incompatible with JSON deserialization.
    #[display("Unsupported output for {name} as JSON:\n{output:?}")]
    #[from(skip)]
    UnsupportedJsonOutput {
        /// The actual response output received.
        output: Output,
        /// Name of the type requested.
        name: &'static str,
    },

    /// Response output type is incompatible with text extraction.
    #[display("Unsupported output for text:\n{output:?}")]
    #[from(skip)]
    UnsupportedTextOutput {
        /// The actual response output received.
        output: Output,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Server returned a status code outside the accepted policy.
    #[display("Unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The unexpected HTTP status code received.
        status_code: u16,
        /// The response body for debugging.
        body: String,
    },
}
