//! # ReqRes Client
//!
//! A typed HTTP client for the [reqres](https://reqres.in) REST API, built for
//! contract tests.
//!
//! Every endpoint has one method on [`ReqResClient`] returning an
//! [`ApiResponse`] with the status, the headers and a [`Reply`] decoded by
//! status class. Expected API failures, such as a `400 {"error": "Missing password"}`,
//! are values the test asserts on; only transport problems and statuses above
//! `500` are [`ApiClientError`]s.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reqres_client::model::LoginRequest;
//! use reqres_client::{ReqResClient, Reply};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ReqResClient::builder().build()?;
//!
//! let response = client
//!     .post_login(&LoginRequest::without_password("peter@klaven"))
//!     .await?;
//!
//! assert_eq!(response.status(), 400);
//! assert!(matches!(response.body(), Reply::Failure(error) if error.error == "Missing password"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Lower-level calls
//!
//! The typed operations sit on a generic builder: [`ReqResClient::get`] and its
//! siblings return an [`ApiCall`] that can be configured, then awaited.
//!
//! ```rust,no_run
//! use reqres_client::{CallPath, ReqResClient};
//! use reqres_client::model::{Single, User};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ReqResClient::builder().build()?;
//!
//! let path = CallPath::from("/users/{id}").add_param("id", 2);
//! let user = client
//!     .get(path)?
//!     .with_expected_status(200)
//!     .await?
//!     .as_json::<Single<User>>()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Status policy
//!
//! By default any status from `100` to `500` inclusive is handed back to the
//! caller, see [`ExpectedStatusCodes`]. Anything else fails with
//! [`ApiClientError::UnexpectedStatusCode`].

mod client;

pub mod model;

pub use self::client::{
    API_KEY_HEADER, ApiCall, ApiClientError, ApiResponse, ApiResult, Authentication,
    AuthenticationError, CallBody, CallPath, CallQuery, CallResult, DEFAULT_BASE_PATH,
    DEFAULT_HOST, ExpectedStatusCodes, Output, RELAXED_MAX_STATUS, RELAXED_MIN_STATUS, RawBody,
    RawResult, Reply, ReqResClient, ReqResClientBuilder, SecureString,
};
