use headers::ContentType;
use http::StatusCode;

/// Response body as read from the wire, classified by content type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Output {
    /// No body (204, or zero bytes).
    Empty,
    /// `application/json`, any charset.
    Json(String),
    /// `text/*`.
    Text(String),
    /// `application/octet-stream`.
    Bytes(Vec<u8>),
    /// Any other content type, kept as text.
    Other {
        /// Body decoded lossily as UTF-8.
        body: String,
    },
}

impl Output {
    pub(in crate::client) fn classify(
        status: StatusCode,
        content_type: Option<&ContentType>,
        bytes: Vec<u8>,
    ) -> Self {
        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return Self::Empty;
        }

        let Some(content_type) = content_type else {
            return Self::Other {
                body: String::from_utf8_lossy(&bytes).into_owned(),
            };
        };

        // `ContentType::json()` carries no charset, so compare the essence only
        let mime = content_type.to_string();
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence {
            "application/json" => Self::Json(String::from_utf8_lossy(&bytes).into_owned()),
            "application/octet-stream" => Self::Bytes(bytes),
            text if text.starts_with("text/") => {
                Self::Text(String::from_utf8_lossy(&bytes).into_owned())
            }
            _ => Self::Other {
                body: String::from_utf8_lossy(&bytes).into_owned(),
            },
        }
    }

    /// The body as text, if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Json(text) | Self::Text(text) | Self::Other { body: text } => Some(text),
            Self::Empty | Self::Bytes(_) => None,
        }
    }

    /// Returns true when no body was received.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
