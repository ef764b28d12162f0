//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::ebay::marketplaces::Marketplace;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// eBay API credentials. Either may be absent; the remote service rejects
/// requests that need a missing one.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Application ID, sent as `SECURITY-APPNAME` to the Finding API
    #[serde(default)]
    pub app_id: Option<String>,

    /// OAuth bearer token for the Browse API
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Credentials {
    pub fn new(app_id: Option<String>, auth_token: Option<String>) -> Self {
        Self { app_id, auth_token }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("app_id", &redact(&self.app_id))
            .field("auth_token", &redact(&self.auth_token))
            .finish()
    }
}

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API credentials
    #[serde(default)]
    pub credentials: Credentials,

    /// eBay site used for Finding queries
    #[serde(default)]
    pub marketplace: Marketplace,

    /// Search keywords
    #[serde(default = "default_keywords")]
    pub keywords: String,

    /// Page size requested from either API
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Whole-request timeout in seconds; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format for stdout
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_keywords() -> String {
    "bestseller".to_string()
}

fn default_limit() -> u32 {
    10
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            marketplace: Marketplace::Us,
            keywords: default_keywords(),
            limit: default_limit(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a default configuration with explicit credentials.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self { credentials, ..Self::default() }
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

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("ebay-listings").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    ///
    /// `EBAY_APP_ID` and `EBAY_AUTH_TOKEN` replace the credentials;
    /// `EBAY_MARKETPLACE` and `EBAY_PROXY` are optional extras. Unparseable
    /// values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(app_id) = std::env::var("EBAY_APP_ID") {
            self.credentials.app_id = Some(app_id);
        }

        if let Ok(token) = std::env::var("EBAY_AUTH_TOKEN") {
            self.credentials.auth_token = Some(token);
        }

        if let Ok(marketplace) = std::env::var("EBAY_MARKETPLACE") {
            if let Ok(m) = marketplace.parse() {
                self.marketplace = m;
            }
        }

        if let Ok(proxy) = std::env::var("EBAY_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }
}

/// Output format for results printed to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
