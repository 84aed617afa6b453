//! HTTP gateway to the Financial Modeling Prep API.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Default upstream API root. The trailing slash matters: joined endpoint
/// fragments must extend the path, not replace its last segment.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the FMP API, constructed once at startup and
/// passed into [`FmpClient`].
#[derive(Debug, Clone)]
pub struct FmpConfig {
    api_key: Option<String>,
    base_url: Url,
    timeout: Duration,
}

impl FmpConfig {
    /// Creates a configuration with the default base URL and timeout.
    ///
    /// A blank or whitespace-only key is treated as unset; an unset key is a
    /// valid degraded state in which every request short-circuits with
    /// [`FmpError::MissingApiKey`].
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid FMP base URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replaces the base URL, normalizing the path to end with a slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = ensure_trailing_slash(base_url);
        self
    }

    /// Replaces the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, FmpError> {
        self.base_url
            .join(endpoint)
            .map_err(|err| FmpError::Request(format!("invalid endpoint URL: {err}")))
    }
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Failure modes for a single FMP API request.
///
/// Every failure path is a value; the client never panics on upstream
/// behavior, and callers render these into report text.
#[derive(Debug)]
pub enum FmpError {
    /// No API key is configured; the request was not sent.
    MissingApiKey,
    /// The underlying HTTP client could not be constructed.
    Build(String),
    /// Transport-level failure: connection, timeout, or invalid endpoint.
    Request(String),
    /// Upstream responded with a non-2xx status.
    Status(u16),
    /// Response body was not valid JSON.
    Decode(String),
}

impl fmt::Display for FmpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "FMP_API_KEY environment variable not set"),
            Self::Build(details) => write!(f, "failed to build HTTP client: {details}"),
            Self::Request(details) => write!(f, "API request failed: {details}"),
            Self::Status(status) => {
                write!(f, "API request failed: server returned HTTP {status}")
            }
            Self::Decode(details) => {
                write!(f, "API request failed: response body is not valid JSON: {details}")
            }
        }
    }
}

impl Error for FmpError {}

/// Request gateway for the FMP API.
///
/// Performs exactly one outbound GET per call, bounded by the configured
/// timeout. No retries, no caching.
#[derive(Debug, Clone)]
pub struct FmpClient {
    http: reqwest::Client,
    config: FmpConfig,
}

impl FmpClient {
    /// Builds the client with the configured request timeout.
    ///
    /// # Errors
    /// Returns [`FmpError::Build`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: FmpConfig) -> Result<Self, FmpError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| FmpError::Build(err.to_string()))?;
        Ok(Self { http, config })
    }

    /// Fetches an endpoint fragment (e.g. `quote/AAPL`) and returns the
    /// decoded JSON body verbatim — list, map, or any other JSON value.
    /// The caller is responsible for any escaping in the fragment.
    ///
    /// # Errors
    /// Returns [`FmpError::MissingApiKey`] without touching the network when
    /// no key is configured, and a transport-shaped error for connection
    /// failures, timeouts, non-2xx statuses, and undecodable bodies.
    pub async fn get(&self, endpoint: &str) -> Result<Value, FmpError> {
        let Some(api_key) = self.config.api_key() else {
            return Err(FmpError::MissingApiKey);
        };

        let url = self.config.endpoint_url(endpoint)?;
        debug!(url = %url, "GET request");

        // reqwest errors echo the request URL, which carries the api key
        // query parameter; strip it before the error reaches logs or text.
        let response = self
            .http
            .get(url)
            .query(&[("apikey", api_key)])
            .send()
            .await
            .map_err(|err| FmpError::Request(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, endpoint, "FMP returned error status");
            return Err(FmpError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FmpError::Request(err.without_url().to_string()))?;
        serde_json::from_str(&body).map_err(|err| FmpError::Decode(err.to_string()))
    }
}
