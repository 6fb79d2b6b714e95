use http::header::{AsHeaderName, CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};

use super::output::Output;

/// The decoded body of an endpoint, tagged by status class.
///
/// `T` is the shape the endpoint declares on success, `E` the shape it declares
/// for a client or server error. Expected API failures are values, not errors.
/// A failure body that does not match `E` is kept as [`Reply::Unexpected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T, E> {
    /// Status below 400.
    Success(T),
    /// Status 400 and above, with the declared failure shape.
    Failure(E),
    /// Status 400 and above, with any other body.
    Unexpected(Output),
}

impl<T, E> Reply<T, E> {
    /// Returns true for a [`Reply::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the success body, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Unexpected(_) => None,
        }
    }

    /// Returns the failure body, if any.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Failure(value) => Some(value),
            Self::Success(_) | Self::Unexpected(_) => None,
        }
    }

    /// Returns the undecoded failure body, if any.
    pub fn unexpected(&self) -> Option<&Output> {
        match self {
            Self::Unexpected(output) => Some(output),
            Self::Success(_) | Self::Failure(_) => None,
        }
    }
}

/// A typed API response: status, headers and decoded body.
///
/// Header names are stored lower-cased; lookups through [`header`](Self::header)
/// are case-insensitive.
#[derive(Debug, Clone)]
pub struct ApiResponse<B> {
    status: StatusCode,
    headers: HeaderMap,
    content_length: Option<u64>,
    body: B,
}

impl<B> ApiResponse<B> {
    pub(in crate::client) fn new(
        status: StatusCode,
        headers: HeaderMap,
        content_length: Option<u64>,
        body: B,
    ) -> Self {
        Self {
            status,
            headers,
            content_length,
            body,
        }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value as text, if present and visible ASCII.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Returns the value of the `content-type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    /// Returns the body length.
    ///
    /// The `content-length` header when present, otherwise the length the
    /// transport knows from the framing (for instance `0` on a `204`).
    pub fn content_length(&self) -> Option<u64> {
        self.header(CONTENT_LENGTH)
            .and_then(|value| value.parse().ok())
            .or(self.content_length)
    }

    /// Returns the decoded body.
    pub fn body(&self) -> &B {
        &self.body
    }

    /// Consumes the response and returns the decoded body.
    pub fn into_body(self) -> B {
        self.body
    }
}
