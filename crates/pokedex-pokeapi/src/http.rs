//! HTTP backend abstraction for PokeAPI.
//!
//! The client is generic over [`HttpBackend`] so tests can swap in canned
//! responses. The production backend uses reqwest with retry on transient
//! failures.

use crate::error::{PokeApiError, PokeApiResult};
use crate::models::PokeApiConfig;
use crate::url::pokemon_name_from_url;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Fetches JSON documents from URLs.
///
/// Implementation detail; external code goes through `PokemonCatalogPort`.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PokeApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Server errors (5xx), 429 and transport errors are retried with
/// exponential backoff. Other statuses fail immediately.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &PokeApiConfig) -> PokeApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
        })
    }

    fn backoff(&self, attempt: u8) -> Duration {
        let factor = 2u64.saturating_pow(u32::from(attempt.saturating_sub(1)));
        Duration::from_millis(self.retry_base_delay_ms.saturating_mul(factor))
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> PokeApiResult<reqwest::Response> {
        let mut last_error: Option<PokeApiError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.backoff(attempt);
                debug!(url = %url, attempt, delay_ms = delay.as_millis() as u64, "Retrying PokeAPI request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let retryable = status.is_server_error() || status.as_u16() == 429;
                    if retryable && attempt < self.max_retries {
                        last_error = Some(PokeApiError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    if status.as_u16() == 404 {
                        if let Some(name) = pokemon_name_from_url(url.as_str()) {
                            return Err(PokeApiError::PokemonNotFound { name });
                        }
                    }

                    return Err(PokeApiError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        warn!(url = %url, error = %e, "PokeAPI request failed");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| PokeApiError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PokeApiResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        Json(serde_json::Value),
        Status(u16),
    }

    /// Fake HTTP backend answering by URL substring, first match wins.
    #[derive(Default)]
    pub struct FakeBackend {
        responses: Mutex<Vec<(String, CannedResponse)>>,
        requests: AtomicUsize,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer URLs containing `url_contains` with `response`.
        pub fn with_response(self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push((url_contains.to_string(), response));
            self
        }

        pub fn with_json(self, url_contains: &str, json: serde_json::Value) -> Self {
            self.with_response(url_contains, CannedResponse::Json(json))
        }

        pub fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            let responses = self.responses.lock().unwrap();
            responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> PokeApiResult<T> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            match self.find_response(url.as_str()) {
                Some(CannedResponse::Json(json)) => serde_json::from_value(json).map_err(Into::into),
                Some(CannedResponse::Status(status)) => Err(PokeApiError::ApiRequestFailed {
                    status,
                    url: url.to_string(),
                }),
                None => Err(PokeApiError::ApiRequestFailed {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }
}
