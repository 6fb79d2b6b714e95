use std::any::type_name;

use headers::{ContentType, HeaderMapExt};
use http::header::{AsHeaderName, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::output::Output;
use super::reply::{ApiResponse, Reply};
use crate::client::ApiClientError;

/// The result of an API call, with the body already read.
///
/// Awaiting an [`ApiCall`](crate::ApiCall) yields a `CallResult`. Decode it with
/// one of the `as_*` methods, or with [`into_reply`](Self::into_reply) to get the
/// typed [`ApiResponse`] used by the per-endpoint operations.
///
/// ```rust,no_run
/// use reqres_client::ReqResClient;
/// # use serde::Deserialize;
/// # #[derive(Deserialize)]
/// # struct Anything {}
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqResClient::builder().build()?;
///
/// let raw = client.get("/users/2")?.await?.as_raw();
/// println!("{} {:?}", raw.status_code(), raw.text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CallResult {
    status: StatusCode,
    headers: HeaderMap,
    content_length: Option<u64>,
    output: Output,
}

/// Represents the raw response data from an HTTP request.
#[derive(Debug, Clone)]
pub struct RawResult {
    status: StatusCode,
    content_type: Option<ContentType>,
    body: RawBody,
}

/// Represents the body content of a raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBody {
    /// Text-based content (UTF-8 encoded)
    Text(String),
    /// Binary content
    Binary(Vec<u8>),
    /// Empty response body
    Empty,
}

impl RawResult {
    /// Returns the HTTP status code of the response.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns the content type of the response, if present.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// Returns the response body.
    pub fn body(&self) -> &RawBody {
        &self.body
    }

    /// Returns the response body as text if it's text content.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            RawBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if the response body is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, RawBody::Empty)
    }
}

impl CallResult {
    pub(in crate::client) async fn new(response: Response) -> Result<Self, ApiClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        // Known for 204 and for responses carrying a `content-length` header
        let content_length = response.content_length();
        let content_type = headers.typed_get::<ContentType>();
        let bytes = response.bytes().await?;
        debug!(%status, len = bytes.len(), "body received");

        let output = Output::classify(status, content_type.as_ref(), bytes.to_vec());
        Ok(Self {
            status,
            headers,
            content_length,
            output,
        })
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a header value as text, looked up case-insensitively.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Returns the classified response body.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Deserializes the JSON body into `T`.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::UnsupportedJsonOutput`] when the body is not JSON,
    /// and with [`ApiClientError::JsonError`] when it does not match `T`.
    pub fn as_json<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let Output::Json(json) = &self.output else {
            return Err(ApiClientError::UnsupportedJsonOutput {
                output: self.output.clone(),
                name: type_name::<T>(),
            });
        };

        deserialize(json)
    }

    /// Returns the body as text.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::UnsupportedTextOutput`] for empty or binary bodies.
    pub fn as_text(&self) -> Result<&str, ApiClientError> {
        match &self.output {
            Output::Json(text) | Output::Text(text) | Output::Other { body: text } => Ok(text),
            Output::Empty | Output::Bytes(_) => Err(ApiClientError::UnsupportedTextOutput {
                output: self.output.clone(),
            }),
        }
    }

    /// Returns true when no body was received.
    pub fn as_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Returns the raw status, content type and body.
    pub fn as_raw(&self) -> RawResult {
        let body = match &self.output {
            Output::Json(text) | Output::Text(text) | Output::Other { body: text } => {
                RawBody::Text(text.clone())
            }
            Output::Bytes(bytes) => RawBody::Binary(bytes.clone()),
            Output::Empty => RawBody::Empty,
        };
        RawResult {
            status: self.status,
            content_type: self.headers.typed_get::<ContentType>(),
            body,
        }
    }

    /// Decodes the body by status class into an [`ApiResponse`].
    ///
    /// A status below 400 decodes the body as `T`, otherwise as `E`.
    /// An empty body is decoded as JSON `null`, so `()` accepts a `204 No Content`.
    /// A failure body that does not decode as `E` is kept as [`Reply::Unexpected`].
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::JsonError`] when a success body does not match `T`.
    pub fn into_reply<T, E>(self) -> Result<ApiResponse<Reply<T, E>>, ApiClientError>
    where
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        let reply = if self.status.is_client_error() || self.status.is_server_error() {
            self.failure_reply()
        } else {
            Reply::Success(self.decode_body::<T>()?)
        };

        Ok(ApiResponse::new(
            self.status,
            self.headers,
            self.content_length,
            reply,
        ))
    }

    fn failure_reply<T, E>(&self) -> Reply<T, E>
    where
        E: DeserializeOwned,
    {
        match self.decode_body::<E>() {
            Ok(error) => Reply::Failure(error),
            Err(error) => {
                warn!(status = %self.status, %error, "failure body kept undecoded");
                Reply::Unexpected(self.output.clone())
            }
        }
    }

    fn decode_body<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        match &self.output {
            Output::Empty => deserialize("null"),
            Output::Json(text) | Output::Text(text) | Output::Other { body: text } => {
                deserialize(text)
            }
            Output::Bytes(_) => Err(ApiClientError::UnsupportedJsonOutput {
                output: self.output.clone(),
                name: type_name::<T>(),
            }),
        }
    }

    /// Returns the value of the `content-type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE)
    }

    /// Returns the body length reported by the transport, if known.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }
}

fn deserialize<T>(json: &str) -> Result<T, ApiClientError>
where
    T: DeserializeOwned,
{
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|err| ApiClientError::JsonError {
        path: err.path().to_string(),
        error: err.into_inner(),
        body: json.to_string(),
    })
}
