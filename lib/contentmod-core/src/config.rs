use std::time::Duration;

use indexmap::IndexMap;

use crate::error::InvokeError;

/// Default `accept-language` header value.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US";

/// Default delay between two polls of a long-running operation.
pub const DEFAULT_RETRY_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `user-agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Immutable client configuration.
///
/// Built once through [`ClientConfig::builder`], then shared by every call of a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Option<String>,
    accept_language: String,
    generate_client_request_id: bool,
    long_running_operation_retry_timeout: Duration,
    user_agent: String,
    host_parameters: IndexMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfigBuilder::default().build()
    }
}

impl ClientConfig {
    /// Creates a configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The base URL feeding the host template.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::MissingBaseUrl`] when absent or blank.
    pub fn base_url(&self) -> Result<&str, InvokeError> {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(InvokeError::MissingBaseUrl)
    }

    /// The default `accept-language` header value.
    pub fn accept_language(&self) -> &str {
        &self.accept_language
    }

    /// Whether each request gets a fresh `x-ms-client-request-id`.
    pub fn generate_client_request_id(&self) -> bool {
        self.generate_client_request_id
    }

    /// The delay between two polls of a long-running operation.
    pub fn long_running_operation_retry_timeout(&self) -> Duration {
        self.long_running_operation_retry_timeout
    }

    /// The `user-agent` header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Extra host template values.
    pub fn host_parameters(&self) -> &IndexMap<String, String> {
        &self.host_parameters
    }
}

/// Builder for [`ClientConfig`].
///
/// # Default Configuration
///
/// - **Base URL**: none (every call fails with [`InvokeError::MissingBaseUrl`] until set)
/// - **Accept language**: `en-US`
/// - **Client request id**: generated for each request
/// - **Long-running operation retry timeout**: 30 seconds
/// - **User agent**: `contentmod-core/<version>`
/// - **Host parameters**: none
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use contentmod_core::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .with_base_url("https://westus.api.cognitive.microsoft.com")
///     .with_accept_language("fr-FR")
///     .with_long_running_operation_retry_timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.accept_language(), "fr-FR");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    accept_language: String,
    generate_client_request_id: bool,
    long_running_operation_retry_timeout: Duration,
    user_agent: String,
    host_parameters: IndexMap<String, String>,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            generate_client_request_id: true,
            long_running_operation_retry_timeout: DEFAULT_RETRY_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            host_parameters: IndexMap::new(),
        }
    }
}

impl ClientConfigBuilder {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the default `accept-language`.
    #[must_use]
    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = language.into();
        self
    }

    /// Enables or disables the `x-ms-client-request-id` header.
    #[must_use]
    pub fn with_generate_client_request_id(mut self, generate: bool) -> Self {
        self.generate_client_request_id = generate;
        self
    }

    /// Sets the delay between two polls of a long-running operation.
    #[must_use]
    pub fn with_long_running_operation_retry_timeout(mut self, timeout: Duration) -> Self {
        self.long_running_operation_retry_timeout = timeout;
        self
    }

    /// Sets the `user-agent`, as `product/version`.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a value for a host template placeholder.
    #[must_use]
    pub fn with_host_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.host_parameters.insert(name.into(), value.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ClientConfig {
        let Self {
            base_url,
            accept_language,
            generate_client_request_id,
            long_running_operation_retry_timeout,
            user_agent,
            host_parameters,
        } = self;

        ClientConfig {
            base_url,
            accept_language,
            generate_client_request_id,
            long_running_operation_retry_timeout,
            user_agent,
            host_parameters,
        }
    }
}
