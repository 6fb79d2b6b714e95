use headers::ContentType;
use serde::Serialize;

use super::ApiClientError;

/// The body of a request with its content type.
#[derive(Clone, derive_more::Debug)]
pub struct CallBody {
    pub(super) content_type: ContentType,
    #[debug(ignore)]
    pub(super) data: Vec<u8>,
}

impl CallBody {
    /// Serializes `t` as `application/json`.
    ///
    /// # Errors
    ///
    /// Fails when `t` cannot be serialized.
    pub fn json<T>(t: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(t)?;
        Ok(Self {
            content_type: ContentType::json(),
            data,
        })
    }

    /// Returns the serialized bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
