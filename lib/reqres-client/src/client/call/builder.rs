use std::ops::RangeInclusive;

use serde::Serialize;

use super::ApiCall;
use crate::client::response::ExpectedStatusCodes;
use crate::client::{ApiClientError, Authentication, CallBody, CallQuery};

impl ApiCall {
    /// Sets the query parameters, replacing any previous ones.
    #[must_use]
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = query;
        self
    }

    /// Sets the query parameters from the fields of a struct.
    ///
    /// ```rust
    /// # use reqres_client::{ReqResClient, model::PageQuery};
    /// # fn example() -> Result<(), reqres_client::ApiClientError> {
    /// let client = ReqResClient::builder().build()?;
    /// let call = client.get("/users")?.with_query_params(&PageQuery::page(2))?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a flat struct or map.
    pub fn with_query_params<T>(self, value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let query = CallQuery::from_serialize(value)?;
        Ok(self.with_query(query))
    }

    /// Overrides the client credentials for this call.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Sends this call without credentials.
    #[must_use]
    pub fn with_authentication_none(mut self) -> Self {
        self.authentication = None;
        self
    }

    /// Replaces the status policy for this call.
    #[must_use]
    pub fn with_expected_status_codes(mut self, codes: ExpectedStatusCodes) -> Self {
        self.expected_status_codes = codes;
        self
    }

    /// Accepts only the statuses in `range`.
    ///
    /// # Panics
    ///
    /// Panics on an invalid range, see [`ExpectedStatusCodes::from_inclusive_range`].
    #[must_use]
    pub fn with_status_range_inclusive(mut self, range: RangeInclusive<u16>) -> Self {
        self.expected_status_codes = ExpectedStatusCodes::from_inclusive_range(range);
        self
    }

    /// Accepts only `status`.
    ///
    /// ```rust
    /// # use reqres_client::ReqResClient;
    /// # fn example() -> Result<(), reqres_client::ApiClientError> {
    /// let client = ReqResClient::builder().build()?;
    /// let call = client.delete("/users/2")?.with_expected_status(204);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `status` is not a valid HTTP status code.
    #[must_use]
    pub fn with_expected_status(mut self, status: u16) -> Self {
        self.expected_status_codes = ExpectedStatusCodes::from_single(status);
        self
    }

    /// Also accepts `status`, on top of the current policy.
    #[must_use]
    pub fn add_expected_status(mut self, status: u16) -> Self {
        self.expected_status_codes = self.expected_status_codes.add_single(status);
        self
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Fails when `t` cannot be serialized.
    pub fn json<T>(mut self, t: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        self.body = Some(CallBody::json(t)?);
        Ok(self)
    }
}
