//! Parameterized host resolution.
//!
//! Operations are declared relative to a host template such as `{Endpoint}` or
//! `https://{region}.api.example.com`. The placeholders are filled from the client
//! configuration at call time.

use indexmap::IndexMap;

use crate::config::ClientConfig;
use crate::error::InvokeError;
use crate::request::{placeholders, substitute};

/// Default name of the header describing the parameterized host.
pub const PARAMETERIZED_HOST_HEADER: &str = "x-ms-parameterized-host";

/// Replaces every `{name}` token of `template` with its value.
///
/// Values are inserted verbatim (no percent-encoding): they are host or URL fragments.
/// Every token is replaced in one pass, so inserted values are not resolved again.
///
/// # Errors
///
/// Returns [`InvokeError::MissingHostParameter`] when a token has no value.
///
/// # Example
///
/// ```rust
/// use contentmod_core::host::resolve;
/// use indexmap::IndexMap;
///
/// let mut values = IndexMap::new();
/// values.insert("region".to_string(), "westus".to_string());
///
/// let host = resolve("https://{region}.api.cognitive.microsoft.com", &values)?;
/// assert_eq!(host, "https://westus.api.cognitive.microsoft.com");
/// # Ok::<(), contentmod_core::InvokeError>(())
/// ```
pub fn resolve(template: &str, values: &IndexMap<String, String>) -> Result<String, InvokeError> {
    substitute(template, |name| values.get(name))
        .map_err(|name| InvokeError::MissingHostParameter { name })
}

/// A host template shared by all operations of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterizedHost {
    /// The template, e.g. `{Endpoint}`.
    pub template: &'static str,
    /// The placeholder fed from [`ClientConfig::base_url`].
    pub base_url_parameter: &'static str,
    /// The header describing the host, if the service expects one.
    pub header: Option<&'static str>,
}

/// A host resolved against a client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHost {
    /// The host URL operation paths are appended to.
    pub url: String,
    /// The parameterized-host header as `(name, value)`.
    pub header: Option<(&'static str, String)>,
}

impl ParameterizedHost {
    /// Creates a host template whose `base_url_parameter` placeholder is fed from the base URL.
    pub const fn new(template: &'static str, base_url_parameter: &'static str) -> Self {
        Self {
            template,
            base_url_parameter,
            header: Some(PARAMETERIZED_HOST_HEADER),
        }
    }

    /// Disables (or renames) the parameterized-host header.
    #[must_use]
    pub const fn with_header(self, header: Option<&'static str>) -> Self {
        Self { header, ..self }
    }

    /// Collects the placeholder values available in the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::MissingBaseUrl`] when the base URL is absent or blank.
    pub fn values(&self, config: &ClientConfig) -> Result<IndexMap<String, String>, InvokeError> {
        let base_url = config.base_url()?;

        let mut values = config.host_parameters().clone();
        values.insert(self.base_url_parameter.to_string(), base_url.to_string());
        Ok(values)
    }

    /// Resolves the host URL and the parameterized-host header.
    ///
    /// # Errors
    ///
    /// Fails with [`InvokeError::MissingBaseUrl`] or [`InvokeError::MissingHostParameter`].
    pub fn resolve(&self, config: &ClientConfig) -> Result<ResolvedHost, InvokeError> {
        let values = self.values(config)?;
        let url = resolve(self.template, &values)?;
        let header = self
            .header
            .map(|name| (name, Self::header_value(self.template, &values)));

        Ok(ResolvedHost { url, header })
    }

    /// Renders the header as `{placeholder}, value` pairs joined with `, `.
    fn header_value(template: &str, values: &IndexMap<String, String>) -> String {
        placeholders(template)
            .filter_map(|name| {
                values
                    .get(name)
                    .map(|value| ["{", name, "}, ", value].concat())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
