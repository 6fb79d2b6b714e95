use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::HeaderValue;
use http::header::{AUTHORIZATION, HeaderName};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Header carrying the project key on the hosted reqres service.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Credentials that cannot be turned into a request header.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Bearer token contains invalid characters for HTTP headers.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Description of the invalid characters.
        message: String,
    },

    /// Basic authentication username contains a colon.
    #[display("Basic auth username contains invalid characters: {message}")]
    InvalidUsername {
        /// Description of the invalid characters.
        message: String,
    },

    /// Basic authentication credentials do not fit in a header.
    #[display("Basic auth password contains invalid characters: {message}")]
    InvalidPassword {
        /// Description of the invalid characters.
        message: String,
    },

    /// API key header name is invalid.
    #[display("Invalid API key header name '{header_name}': {message}")]
    InvalidHeaderName {
        /// The rejected header name.
        header_name: String,
        /// Description of why the header name is invalid.
        message: String,
    },

    /// API key value contains invalid characters for HTTP headers.
    #[display("API key contains invalid characters: {message}")]
    InvalidApiKey {
        /// Description of the invalid characters.
        message: String,
    },
}

/// A secret that is zeroed on drop and never printed in full.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the secret.
    ///
    /// Avoid keeping the returned reference around.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn mask(value: &str) -> String {
        let chars = value.chars().collect::<Vec<_>>();
        match (chars.get(..4), chars.len().checked_sub(4).and_then(|at| chars.get(at..))) {
            (Some(head), Some(tail)) if chars.len() > 8 => {
                format!(
                    "{}...{}",
                    head.iter().collect::<String>(),
                    tail.iter().collect::<String>()
                )
            }
            _ => "***".to_string(),
        }
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::mask(&self.0))
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// A credential sent as a header with every call.
///
/// ```rust
/// use reqres_client::Authentication;
///
/// // the hosted service reads its project key from `x-api-key`
/// let auth = Authentication::api_key("reqres-free-v1");
///
/// // a token obtained from `POST /login`
/// let auth = Authentication::Bearer("QpwL5tke4Pnpja7X4".into());
/// ```
#[derive(Clone)]
pub enum Authentication {
    /// `Authorization: Bearer <token>`.
    Bearer(SecureString),

    /// `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// The username, without any colon.
        username: String,
        /// The password.
        password: SecureString,
    },

    /// `<header_name>: <key>`.
    ApiKey {
        /// The header name.
        header_name: String,
        /// The key.
        key: SecureString,
    },
}

impl Authentication {
    /// An API key sent in the [`API_KEY_HEADER`] header.
    pub fn api_key(key: impl Into<SecureString>) -> Self {
        Self::ApiKey {
            header_name: API_KEY_HEADER.to_string(),
            key: key.into(),
        }
    }

    /// Builds the header to add to a request.
    ///
    /// # Errors
    ///
    /// Fails when the credentials cannot be encoded as a header.
    pub fn to_header(&self) -> Result<(HeaderName, HeaderValue), AuthenticationError> {
        match self {
            Self::Bearer(token) => {
                let value = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
                    .map_err(|err| AuthenticationError::InvalidBearerToken {
                        message: err.to_string(),
                    })?;
                Ok((AUTHORIZATION, value))
            }
            Self::Basic { username, password } => {
                if username.contains(':') {
                    return Err(AuthenticationError::InvalidUsername {
                        message: "Username cannot contain colon (:) character".to_string(),
                    });
                }
                let credentials = STANDARD.encode(format!("{username}:{}", password.as_str()));
                let value = HeaderValue::from_str(&format!("Basic {credentials}")).map_err(
                    |err| AuthenticationError::InvalidPassword {
                        message: err.to_string(),
                    },
                )?;
                Ok((AUTHORIZATION, value))
            }
            Self::ApiKey { header_name, key } => {
                let name = HeaderName::from_bytes(header_name.as_bytes()).map_err(|err| {
                    AuthenticationError::InvalidHeaderName {
                        header_name: header_name.clone(),
                        message: err.to_string(),
                    }
                })?;
                let mut value = HeaderValue::from_str(key.as_str()).map_err(|err| {
                    AuthenticationError::InvalidApiKey {
                        message: err.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                Ok((name, value))
            }
        }
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::ApiKey { header_name, .. } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("key", &"[REDACTED]")
                .finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(token) => write!(f, "Bearer {token}"),
            Self::Basic { username, .. } => write!(f, "Basic (username: {username})"),
            Self::ApiKey { header_name, key } => write!(f, "ApiKey ({header_name}: {key})"),
        }
    }
}
