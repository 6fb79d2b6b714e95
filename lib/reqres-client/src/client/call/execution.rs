use std::future::{Future, IntoFuture};
use std::pin::Pin;

use headers::HeaderMapExt;
use http::{Method, Uri};
use reqwest::{Body, Request};
use tracing::{debug, warn};
use url::Url;

use super::{ApiCall, BODY_MAX_LENGTH};
use crate::client::path::PathResolved;
use crate::client::response::ExpectedStatusCodes;
use crate::client::{ApiClientError, Authentication, CallBody, CallPath, CallQuery, CallResult};

impl ApiCall {
    pub(in crate::client) fn build(
        client: reqwest::Client,
        base_uri: Uri,
        method: Method,
        path: CallPath,
        authentication: Option<Authentication>,
        expected_status_codes: ExpectedStatusCodes,
    ) -> Self {
        Self {
            client,
            base_uri,
            method,
            path,
            query: CallQuery::default(),
            body: None,
            authentication,
            expected_status_codes,
        }
    }
}

impl ApiCall {
    /// Sends the request and reads the response body.
    ///
    /// # Errors
    ///
    /// Fails when the request cannot be built or sent, or when the status is
    /// outside the expected status codes.
    async fn exchange(self) -> Result<CallResult, ApiClientError> {
        let Self {
            client,
            base_uri,
            method,
            path,
            query,
            body,
            authentication,
            expected_status_codes,
        } = self;

        let url = Self::build_url(&base_uri, &path, &query)?;
        let request = Self::build_request(method, url, body.as_ref(), authentication.as_ref())?;

        debug!(?request, "sending...");
        let response = client.execute(request).await?;
        debug!(status = %response.status(), "...receiving");

        let status_code = response.status().as_u16();
        if !expected_status_codes.contains(status_code) {
            let body = response
                .text()
                .await
                .map(|text| truncate(&text))
                .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));
            warn!(status_code, %path, "unexpected status code");
            return Err(ApiClientError::UnexpectedStatusCode { status_code, body });
        }

        CallResult::new(response).await
    }

    pub(super) fn build_url(
        base_uri: &Uri,
        path: &CallPath,
        query: &CallQuery,
    ) -> Result<Url, ApiClientError> {
        let path_resolved = PathResolved::try_from(path.clone())?;
        let base_uri = base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path_resolved.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !query.is_empty() {
            let query_string = query.to_query_string()?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }

    pub(super) fn build_request(
        method: Method,
        url: Url,
        body: Option<&CallBody>,
        authentication: Option<&Authentication>,
    ) -> Result<Request, ApiClientError> {
        let mut request = Request::new(method, url);
        let headers = request.headers_mut();

        if let Some(auth) = authentication {
            let (name, value) = auth.to_header()?;
            headers.insert(name, value);
        }

        if let Some(body) = body {
            headers.typed_insert(body.content_type.clone());
            *request.body_mut() = Some(Body::from(body.data.clone()));
        }

        Ok(request)
    }
}

/// Keeps at most [`BODY_MAX_LENGTH`] bytes, cut on a char boundary.
fn truncate(text: &str) -> String {
    if text.len() <= BODY_MAX_LENGTH {
        return text.to_string();
    }
    let mut end = BODY_MAX_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let head = text.get(..end).unwrap_or_default();
    format!("{head}... (truncated)")
}

impl IntoFuture for ApiCall {
    type Output = Result<CallResult, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_is_kept() {
        assert_eq!(truncate("Not Implemented"), "Not Implemented");
    }

    #[test]
    fn test_long_body_is_truncated_on_char_boundary() {
        let text = "é".repeat(BODY_MAX_LENGTH);

        let truncated = truncate(&text);

        assert!(truncated.ends_with("... (truncated)"));
        assert_eq!(truncated.len(), BODY_MAX_LENGTH + "... (truncated)".len());
    }
}
