use http::{Method, Uri};

use super::response::ExpectedStatusCodes;
use super::{Authentication, CallBody, CallPath, CallQuery};

pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

mod builder;
mod execution;

/// A single HTTP request being configured.
///
/// Obtained from [`ReqResClient::call`](crate::ReqResClient::call) or one of the
/// verb helpers. Awaiting it sends exactly one request and yields a
/// [`CallResult`](crate::CallResult).
///
/// # Method Groups
///
/// - Body: [`json(data)`](Self::json)
/// - Parameters: [`with_query(query)`](Self::with_query),
///   [`with_query_params(value)`](Self::with_query_params)
/// - Status policy: [`with_expected_status_codes`](Self::with_expected_status_codes),
///   [`with_expected_status`](Self::with_expected_status),
///   [`add_expected_status`](Self::add_expected_status),
///   [`with_status_range_inclusive`](Self::with_status_range_inclusive)
/// - Credentials: [`with_authentication`](Self::with_authentication),
///   [`with_authentication_none`](Self::with_authentication_none)
///
/// # Default Behavior
///
/// Any status from 100 to 500 inclusive is returned to the caller; anything
/// above fails with [`ApiClientError::UnexpectedStatusCode`](crate::ApiClientError::UnexpectedStatusCode).
#[derive(derive_more::Debug)]
pub struct ApiCall {
    pub(super) client: reqwest::Client,
    pub(super) base_uri: Uri,

    pub(super) method: Method,
    pub(super) path: CallPath,
    pub(super) query: CallQuery,

    #[debug(ignore)]
    pub(super) body: Option<CallBody>,

    pub(super) authentication: Option<Authentication>,
    pub(super) expected_status_codes: ExpectedStatusCodes,
}
