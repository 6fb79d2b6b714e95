use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use super::ApiClientError;

static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// A request path, optionally templated with `{name}` parameters.
///
/// ```rust
/// use reqres_client::CallPath;
///
/// let path = CallPath::from("/users/{id}").add_param("id", 2);
/// assert_eq!(path.to_string(), "/users/{id}");
/// ```
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    pub(super) path: String,
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Binds a value to a `{name}` template parameter.
    ///
    /// The value is percent-encoded when the path is resolved.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::new(),
        }
    }
}

/// A path with every template parameter substituted.
#[derive(Debug, Clone)]
pub(super) struct PathResolved {
    pub(super) path: String,
}

impl TryFrom<CallPath> for PathResolved {
    type Error = ApiClientError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { path, args } = value;
        let mut resolved = path.clone();
        for (name, value) in &args {
            if !resolved.contains(&["{", name, "}"].concat()) {
                warn!(%path, %name, "unused path parameter");
                continue;
            }
            resolved = replace_path_param(&resolved, name, &encode_path_param_value(value));
        }

        let missings = RE
            .captures_iter(&resolved)
            .filter_map(|caps| caps.name("name"))
            .map(|name| name.as_str().to_string())
            .collect::<Vec<_>>();
        if !missings.is_empty() {
            return Err(ApiClientError::PathUnresolved { path, missings });
        }

        Ok(Self { path: resolved })
    }
}
