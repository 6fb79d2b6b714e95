use std::fmt::Debug;

use http::Uri;
use http::uri::{PathAndQuery, Scheme};
use url::Url;

use super::response::ExpectedStatusCodes;
use super::{ApiClientError, Authentication, ReqResClient};

/// Host of the hosted reqres service.
pub const DEFAULT_HOST: &str = "reqres.in";

/// Base path of the hosted reqres API.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Builder for [`ReqResClient`].
///
/// # Default Configuration
///
/// - **Scheme**: HTTPS
/// - **Host**: `reqres.in`
/// - **Port**: none, the scheme default
/// - **Base path**: `/api`
/// - **Status policy**: [`ExpectedStatusCodes::default`], any status in `100..=500`
///
/// # Example
///
/// ```rust
/// use reqres_client::{Authentication, ReqResClient};
///
/// # fn example() -> Result<(), reqres_client::ApiClientError> {
/// // the hosted service
/// let client = ReqResClient::builder()
///     .with_authentication(Authentication::api_key("reqres-free-v1"))
///     .build()?;
/// assert_eq!(client.base_uri().to_string(), "https://reqres.in/api");
///
/// // a local replica
/// let client = ReqResClient::builder()
///     .with_base_url("http://127.0.0.1:3000")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqResClientBuilder {
    client: reqwest::Client,
    scheme: Scheme,
    host: String,
    port: Option<u16>,
    base_path: Option<PathAndQuery>,
    authentication: Option<Authentication>,
    expected_status_codes: ExpectedStatusCodes,
}

impl ReqResClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when the scheme, host, port and base path do not form a valid URI.
    pub fn build(self) -> Result<ReqResClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            authentication,
            expected_status_codes,
        } = self;

        let authority = match port {
            Some(port) => format!("{host}:{port}"),
            None => host,
        };
        let builder = Uri::builder().scheme(scheme).authority(authority);
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        Ok(ReqResClient {
            client,
            base_uri,
            authentication,
            expected_status_codes,
        })
    }

    /// Sets the scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host name or IP address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets an explicit port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the path prefix of every request.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::InvalidBasePath`] when the path cannot be
    /// parsed, for instance when it contains spaces.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets scheme, host, port and base path from a full URL.
    ///
    /// Used to point the client at a mock server or a local replica.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::InvalidBaseUrl`] when the URL cannot be parsed,
    /// has no host, or is not `http`/`https`.
    pub fn with_base_url(self, base_url: &str) -> Result<Self, ApiClientError> {
        let invalid = |error: String| ApiClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            error,
        };

        let url = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        let scheme = match url.scheme() {
            "http" => Scheme::HTTP,
            "https" => Scheme::HTTPS,
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        };
        let host = url
            .host_str()
            .ok_or_else(|| invalid("missing host".to_string()))?;

        let mut builder = self.with_scheme(scheme).with_host(host);
        builder.port = url.port();
        builder.with_base_path(url.path())
    }

    /// Sends these credentials with every call.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Replaces the default status policy of every call.
    #[must_use]
    pub fn with_expected_status_codes(mut self, codes: ExpectedStatusCodes) -> Self {
        self.expected_status_codes = codes;
        self
    }

    /// Uses a preconfigured transport.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

impl Default for ReqResClientBuilder {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            scheme: Scheme::HTTPS,
            host: DEFAULT_HOST.to_string(),
            port: None,
            base_path: Some(PathAndQuery::from_static(DEFAULT_BASE_PATH)),
            authentication: None,
            expected_status_codes: ExpectedStatusCodes::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_targets_reqres() {
        let client = ReqResClientBuilder::default()
            .build()
            .expect("should build client");

        insta::assert_snapshot!(client.base_uri, @"https://reqres.in/api");
    }

    #[test]
    fn test_builder_with_custom_parts() {
        let client = ReqResClientBuilder::default()
            .with_scheme(Scheme::HTTP)
            .with_host("localhost")
            .with_port(8080)
            .with_base_path("/v1")
            .expect("valid base path")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(client.base_uri, @"http://localhost:8080/v1");
    }

    #[test]
    fn test_builder_with_base_url() {
        let client = ReqResClientBuilder::default()
            .with_base_url("http://127.0.0.1:4242")
            .expect("valid base url")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(client.base_uri, @"http://127.0.0.1:4242/");
    }

    #[test]
    fn test_builder_with_base_url_keeps_the_path() {
        let client = ReqResClientBuilder::default()
            .with_base_url("https://reqres.in:443/api")
            .expect("valid base url")
            .build()
            .expect("should build client");

        // the default port is dropped by the URL parser
        insta::assert_snapshot!(client.base_uri, @"https://reqres.in/api");
    }

    #[test]
    fn test_builder_with_invalid_base_url() {
        let error = ReqResClientBuilder::default()
            .with_base_url("ftp://reqres.in/api")
            .expect_err("ftp is not supported");

        insta::assert_snapshot!(error, @"Invalid base URL 'ftp://reqres.in/api': unsupported scheme 'ftp'");

        let error = ReqResClientBuilder::default()
            .with_base_url("not a url")
            .expect_err("not a url");
        assert!(matches!(error, ApiClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_builder_with_invalid_base_path() {
        let result = ReqResClientBuilder::default().with_base_path("invalid path with spaces");

        assert!(matches!(result, Err(ApiClientError::InvalidBasePath { .. })));
    }

    #[test]
    fn test_builder_with_authentication() {
        let client = ReqResClientBuilder::default()
            .with_authentication(Authentication::api_key("reqres-free-v1"))
            .build()
            .expect("should build client");

        assert!(matches!(
            client.authentication,
            Some(Authentication::ApiKey { ref header_name, ref key })
                if header_name == "x-api-key" && key.as_str() == "reqres-free-v1"
        ));
    }

    #[test]
    fn test_builder_with_expected_status_codes() {
        let client = ReqResClientBuilder::default()
            .with_expected_status_codes(ExpectedStatusCodes::from_inclusive_range(200..=299))
            .build()
            .expect("should build client");

        assert!(client.expected_status_codes.contains(204));
        assert!(!client.expected_status_codes.contains(404));
    }
}
