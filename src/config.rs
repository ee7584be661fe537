//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::client::http::DEFAULT_BASE_URL;
use crate::models::Marketplace;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// SmartScout API key. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    /// The raw key, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API key sent as a bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<ApiKey>,

    /// API root, including the version prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Marketplace used when a request does not name one
    #[serde(default)]
    pub marketplace: Marketplace,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Log each request as a curl command
    #[serde(default)]
    pub verbose: bool,

    /// Mask the API key in verbose output
    #[serde(default = "default_true")]
    pub redact_credentials: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Page limit when following `nextPageId`
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_max_pages() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            marketplace: Marketplace::Us,
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            proxy: None,
            verbose: false,
            redact_credentials: true,
            format: OutputFormat::Table,
            max_pages: default_max_pages(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("smartscout.toml");
        if local_config.exists() {
            debug!("Found smartscout.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("smartscout").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies `SMARTSCOUT_*` environment overrides. Unparseable values are
    /// ignored.
    pub fn with_env(self) -> Self {
        self.with_vars(|name| std::env::var(name).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = var("SMARTSCOUT_API_KEY") {
            let key = ApiKey::new(key);
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }

        if let Some(url) = var("SMARTSCOUT_BASE_URL") {
            self.base_url = url;
        }

        if let Some(marketplace) = var("SMARTSCOUT_MARKETPLACE") {
            if let Ok(m) = marketplace.parse() {
                self.marketplace = m;
            }
        }

        if let Some(timeout) = var("SMARTSCOUT_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Some(proxy) = var("SMARTSCOUT_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, "https://api.smartscout.com/v1");
        assert_eq!(config.marketplace, Marketplace::Us);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.proxy.is_none());
        assert!(!config.verbose);
        assert!(config.redact_credentials);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.max_pages, 10);
    }

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("  sk-live-123  ");
        assert_eq!(key.expose(), "sk-live-123");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");

        let config = Config { api_key: Some(key), ..Config::default() };
        assert!(!format!("{config:?}").contains("sk-live-123"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);

        let err = "markdown".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
        assert!(err.contains("table, json, csv"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            api_key = "sk-test"
            marketplace = "UK"
            timeout_secs = 5
            max_pages = 3
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api_key, Some(ApiKey::new("sk-test")));
        assert_eq!(config.marketplace, Marketplace::Uk);
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.redact_credentials);
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            api_key = "sk-test"
            base_url = "http://localhost:8080/v1"
            marketplace = "DE"
            timeout_secs = 60
            connect_timeout_secs = 2
            proxy = "socks5://localhost:1080"
            verbose = true
            redact_credentials = false
            format = "csv"
            max_pages = 50
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.marketplace, Marketplace::De);
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.connect_timeout_secs, 2);
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert!(config.verbose);
        assert!(!config.redact_credentials);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.max_pages, 50);
    }

    #[test]
    fn test_config_rejects_unknown_marketplace() {
        let result = toml::from_str::<Config>(r#"marketplace = "BR""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            marketplace = "FR"
            format = "json"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.marketplace, Marketplace::Fr);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"marketplace = "JP""#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.marketplace, Marketplace::Jp);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::new().with_vars(vars(&[
            ("SMARTSCOUT_API_KEY", "sk-env"),
            ("SMARTSCOUT_BASE_URL", "http://staging/v1"),
            ("SMARTSCOUT_MARKETPLACE", "CA"),
            ("SMARTSCOUT_TIMEOUT", "45"),
            ("SMARTSCOUT_PROXY", "http://proxy:8080"),
        ]));

        assert_eq!(config.api_key.as_ref().map(ApiKey::expose), Some("sk-env"));
        assert_eq!(config.base_url, "http://staging/v1");
        assert_eq!(config.marketplace, Marketplace::Ca);
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));
    }

    #[test]
    fn test_env_invalid_values_ignored() {
        let base = Config { api_key: Some("sk-file".into()), ..Config::default() };
        let config = base.with_vars(vars(&[
            ("SMARTSCOUT_API_KEY", "   "),
            ("SMARTSCOUT_MARKETPLACE", "Atlantis"),
            ("SMARTSCOUT_TIMEOUT", "soon"),
        ]));

        assert_eq!(config.api_key, Some(ApiKey::new("sk-file")));
        assert_eq!(config.marketplace, Marketplace::Us);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            api_key: Some("sk".into()),
            marketplace: Marketplace::Mx,
            proxy: Some("socks5://localhost:1080".to_string()),
            format: OutputFormat::Json,
            max_pages: 4,
            ..Config::default()
        };

        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.api_key, config.api_key);
        assert_eq!(parsed.marketplace, config.marketplace);
        assert_eq!(parsed.proxy, config.proxy);
        assert_eq!(parsed.format, config.format);
        assert_eq!(parsed.max_pages, config.max_pages);
    }
}
