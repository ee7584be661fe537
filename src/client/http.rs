//! HTTP transport for the SmartScout API, built on wreq.

use super::curl::curl_command;
use super::dispatch::{ApiRequest, Dispatch};
use crate::config::{ApiKey, Config};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::{Client, StatusCode};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.smartscout.com/v1";

/// Authenticated SmartScout client. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone)]
pub struct SmartScoutClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
    timeout: Duration,
    verbose: bool,
    redact_credentials: bool,
}

impl std::fmt::Debug for SmartScoutClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartScoutClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl SmartScoutClient {
    /// Creates a client for the production API with default timeouts.
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        let config = Config { api_key: Some(api_key.into()), ..Config::default() };
        Self::from_config(&config)
    }

    /// Creates a client from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration(
                    "no API key configured (set SMARTSCOUT_API_KEY or pass --api-key)".to_string(),
                )
            })?;

        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)
                .map_err(|e| Error::Configuration(format!("invalid proxy `{proxy_url}`: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(config.timeout_secs),
            verbose: config.verbose,
            redact_credentials: config.redact_credentials,
        })
    }

    /// Points the client at a different API root (staging, a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Logs every request as a `curl` command before sending it.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Whether the bearer token is masked in verbose output. On by default.
    pub fn redact_credentials(mut self, redact: bool) -> Self {
        self.redact_credentials = redact;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", format!("Bearer {}", self.api_key.expose())),
            ("Content-Type", "application/json".to_string()),
            ("Accept", "application/json".to_string()),
        ]
    }

    fn log_curl(&self, request: &ApiRequest, url: &str, headers: &[(&str, String)]) {
        if !self.redact_credentials {
            warn!("Credential redaction is off; the API key appears in the log output below");
        }
        info!("{}", curl_command(request, url, headers, self.redact_credentials));
    }
}

#[async_trait]
impl Dispatch for SmartScoutClient {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url(&request);
        let headers = self.headers();

        if self.verbose {
            self.log_curl(&request, &url, &headers);
        }

        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url.as_str());
        for (name, value) in &headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            let payload = serde_json::to_string(body)
                .map_err(|e| Error::schema("request body", e.to_string()))?;
            builder = builder.body(payload);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                let detail = format!("request to {url} timed out after {}s", self.timeout.as_secs());
                Error::timed_out(detail, self.timeout, e)
            } else if e.is_connect() {
                Error::transport(format!("failed to connect to {url}"), e)
            } else {
                Error::transport(format!("request to {url} failed"), e)
            }
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok());
            warn!("Rate limited by SmartScout");
            return Err(Error::RateLimit { retry_after });
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication);
        }

        let body = response.text().await;

        if !status.is_success() {
            return Err(match body {
                Ok(text) => Error::status(status.as_u16(), text),
                Err(e) => Error::status_unreadable(status.as_u16(), e),
            });
        }

        let text = body.map_err(|e| {
            if e.is_timeout() {
                Error::timed_out("timed out reading response body", self.timeout, e)
            } else {
                Error::transport("failed to read response body", e)
            }
        })?;

        serde_json::from_str(&text).map_err(|e| Error::RemoteApi {
            status: Some(status.as_u16()),
            detail: "unexpected response: body is not valid JSON".to_string(),
            timeout: None,
            source: Some(Box::new(e)),
        })
    }
}
