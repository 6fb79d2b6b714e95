use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;

use super::ApiClientError;

/// Query parameters of a call, kept in insertion order.
///
/// ```rust
/// use reqres_client::CallQuery;
///
/// let query = CallQuery::new().add_param("page", 2).add_param("per_page", 6);
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallQuery {
    params: IndexMap<String, String>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value with the same name.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Builds a query from the fields of a serializable struct, in field order.
    ///
    /// `None` fields are not sent.
    ///
    /// # Errors
    ///
    /// Fails when `value` is not a struct or map of scalar values.
    pub fn from_serialize<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = serde_urlencoded::to_string(value)?;
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(&encoded).map_err(|err| {
            ApiClientError::QuerySerializationError(serde_urlencoded::ser::Error::Custom(
                err.to_string().into(),
            ))
        })?;

        let params = pairs.into_iter().collect();
        Ok(Self { params })
    }

    /// Returns true when no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(super) fn to_query_string(&self) -> Result<String, ApiClientError> {
        let pairs = self.params.iter().collect::<Vec<_>>();
        serde_urlencoded::to_string(pairs).map_err(ApiClientError::from)
    }
}
