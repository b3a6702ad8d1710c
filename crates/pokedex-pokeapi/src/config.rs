//! Public configuration for the PokeAPI client.

use std::time::Duration;

/// Default PokeAPI root.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Configuration for the PokeAPI client.
///
/// # Example
///
/// ```
/// use pokedex_pokeapi::PokeApiClientConfig;
/// use std::time::Duration;
///
/// let config = PokeApiClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_max_retries(1);
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiClientConfig {
    /// API root, without the `/pokemon` segment
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Per-request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for PokeApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            user_agent: concat!("pokedex-pokeapi/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl PokeApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. Defaults to [`DEFAULT_POKEAPI_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for transient errors. Defaults to 3.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff. Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
