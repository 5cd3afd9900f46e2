//! HTTP page fetcher with browser-mimicking headers and typed failures
//!
//! eBay rejects or serves degraded content to clients that do not look like
//! a desktop browser, so every request carries a fixed header set. A fetch
//! never panics: transport problems and non-200 statuses both come back as
//! a [`FetchError`] value.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Typed failure categories for a page fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure, including the 15-second timeout
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The site answered with something other than 200
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Narrow seam between the pipeline and the network.
///
/// The body comes back as a string rather than a parsed document so that
/// futures awaiting a fetch stay `Send` (`scraper::Html` is not); callers
/// parse at the call site. Tests implement this trait with canned pages.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetch `url`, returning the raw body on status 200 and a typed
    /// failure otherwise. Exactly one outbound request per invocation.
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Configuration for fetch behavior, defaulting to the header set and
/// timeout the site is known to accept
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FetcherConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
    /// `Accept` header value
    pub accept: String,
    /// `Accept-Language` header value
    pub accept_language: String,
    /// `Cache-Control` header value (cache bypass)
    pub cache_control: String,
    /// Whether to follow redirects
    pub follow_redirects: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/73.0.3683.86 Safari/537.36"
                .to_string(),
            accept: "*/*".to_string(),
            accept_language: "en-US,en;q=0.8".to_string(),
            cache_control: "max-age=0".to_string(),
            follow_redirects: true,
        }
    }
}

/// Real [`FetchPage`] implementation over a reqwest client.
///
/// The client is built once per fetcher; gzip/deflate acceptance is
/// advertised and decoded transparently by reqwest.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with the default browser-mimicking configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(&FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(config: &FetcherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.accept).context("invalid Accept header value")?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .context("invalid Accept-Language header value")?,
        );
        headers.insert(
            CACHE_CONTROL,
            HeaderValue::from_str(&config.cache_control)
                .context("invalid Cache-Control header value")?,
        );

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .deflate(true)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(5)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch and parse a page in one step.
    ///
    /// Convenience for callers that do not need the future to be `Send`
    /// past this point; the body is parsed immediately after the await.
    pub async fn fetch_document(&self, url: &str) -> Result<Html, FetchError> {
        let body = self.fetch_html(url).await?;
        Ok(Html::parse_document(&body))
    }
}

#[async_trait]
impl FetchPage for PageFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        debug!("HTTP GET: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        // Success is status 200 exactly, not any 2xx.
        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })
    }
}
