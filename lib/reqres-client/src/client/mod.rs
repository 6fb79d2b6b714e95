use http::{Method, Uri};

mod builder;
pub use self::builder::{DEFAULT_BASE_PATH, DEFAULT_HOST, ReqResClientBuilder};

mod call;
pub use self::call::ApiCall;

mod path;
pub use self::path::CallPath;

mod query;
pub use self::query::CallQuery;

mod body;
pub use self::body::CallBody;

mod response;
pub use self::response::{
    ApiResponse, CallResult, ExpectedStatusCodes, Output, RELAXED_MAX_STATUS, RELAXED_MIN_STATUS,
    RawBody, RawResult, Reply,
};

mod auth;
pub use self::auth::{API_KEY_HEADER, Authentication, AuthenticationError, SecureString};

mod operations;
pub use self::operations::ApiResult;

mod error;
pub use self::error::ApiClientError;

/// Typed HTTP client for the reqres API.
///
/// The client is an immutable configuration object: build it once per test
/// harness with [`ReqResClient::builder`] and clone it freely. Each call is a
/// fresh request; nothing is cached or retried.
///
/// # Example
///
/// ```rust,no_run
/// use reqres_client::{ReqResClient, Reply};
///
/// # async fn example() -> Result<(), reqres_client::ApiClientError> {
/// let client = ReqResClient::builder().build()?;
///
/// let response = client.get_user(2).await?;
/// assert_eq!(response.status(), 200);
/// if let Reply::Success(user) = response.body() {
///     println!("{}", user.data.email);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqResClient {
    client: reqwest::Client,
    base_uri: Uri,
    authentication: Option<Authentication>,
    expected_status_codes: ExpectedStatusCodes,
}

impl ReqResClient {
    /// Starts a builder pointing at `https://reqres.in/api`.
    pub fn builder() -> ReqResClientBuilder {
        ReqResClientBuilder::default()
    }

    /// The URI every request path is appended to.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }
}

impl ReqResClient {
    /// Prepares a call.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::PathUnresolved`] when a `{name}` template
    /// parameter of `path` has no value.
    pub fn call(&self, method: Method, path: CallPath) -> Result<ApiCall, ApiClientError> {
        path::PathResolved::try_from(path.clone())?;

        Ok(ApiCall::build(
            self.client.clone(),
            self.base_uri.clone(),
            method,
            path,
            self.authentication.clone(),
            self.expected_status_codes.clone(),
        ))
    }

    /// Prepares a `GET` call.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn get(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::GET, path.into())
    }

    /// Prepares a `POST` call.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn post(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::POST, path.into())
    }

    /// Prepares a `PUT` call.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn put(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::PUT, path.into())
    }

    /// Prepares a `PATCH` call.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn patch(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::PATCH, path.into())
    }

    /// Prepares a `DELETE` call.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub fn delete(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::DELETE, path.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_send_sync_and_clone() {
        fn assert_traits<T: Send + Sync + Clone + 'static>() {}

        assert_traits::<ReqResClient>();
    }

    #[test]
    fn test_call_rejects_unresolved_path_early() {
        let client = ReqResClient::builder().build().expect("should build client");

        let error = client.get("/users/{id}").expect_err("id is missing");

        insta::assert_snapshot!(error, @r#"Path '/users/{id}' is missing required arguments: ["id"]"#);
    }
}
