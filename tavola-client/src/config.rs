//! Client configuration

use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Backend the back office talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.25:9000/";

/// Segment appended to the base URL to resolve image references.
pub const IMAGE_SEGMENT: &str = "images/";

/// Default directory of the session token file
pub const DEFAULT_TOKEN_DIR: &str = ".tavola";

/// How resource collection paths are spelled.
///
/// The deployed backend routes `category;`, `product;` and `desk;`, so member
/// paths come out as `desk;/7`. `Plain` drops the semicolon for backends
/// that route `desk/7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    #[default]
    Legacy,
    Plain,
}

impl PathStyle {
    /// Collection path for a resource (`category` -> `category;`).
    pub fn collection_path(self, resource: &str) -> String {
        match self {
            PathStyle::Legacy => format!("{resource};"),
            PathStyle::Plain => resource.to_string(),
        }
    }

    /// Member path for a resource (`desk`, 7 -> `desk;/7`).
    pub fn member_path(self, resource: &str, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.collection_path(resource), id)
    }
}

impl FromStr for PathStyle {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(PathStyle::Legacy),
            "plain" => Ok(PathStyle::Plain),
            other => Err(ClientError::Config(format!("Unknown path style: {other}"))),
        }
    }
}

/// Client configuration for connecting to the backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://192.168.1.25:9000/")
    pub base_url: String,

    /// Request timeout in seconds; `None` keeps the HTTP client's default
    /// (no timeout)
    pub timeout: Option<u64>,

    /// Directory holding the session token file
    pub token_dir: PathBuf,

    /// Spelling of resource paths
    pub path_style: PathStyle,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            token_dir: PathBuf::from(DEFAULT_TOKEN_DIR),
            path_style: PathStyle::default(),
        }
    }

    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `TAVOLA_BASE_URL` | `http://192.168.1.25:9000/` |
    /// | `TAVOLA_TIMEOUT_SECS` | none (`0` also means none) |
    /// | `TAVOLA_TOKEN_DIR` | `.tavola` |
    /// | `TAVOLA_PATH_STYLE` | `legacy` |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(
            lookup("TAVOLA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        let timeout = lookup("TAVOLA_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok());
        if let Some(seconds) = timeout {
            config = config.with_timeout(seconds);
        }
        if let Some(dir) = lookup("TAVOLA_TOKEN_DIR") {
            config.token_dir = PathBuf::from(dir);
        }
        if let Some(style) = lookup("TAVOLA_PATH_STYLE") {
            match style.parse() {
                Ok(style) => config.path_style = style,
                Err(e) => tracing::warn!(error = %e, "Ignoring TAVOLA_PATH_STYLE"),
            }
        }
        config
    }

    /// Set the request timeout. Zero disables it.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = (seconds > 0).then_some(seconds);
        self
    }

    /// Set the token directory
    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = dir.into();
        self
    }

    /// Set the path style
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = style;
        self
    }

    /// Parsed base URL, always ending in `/`.
    pub fn parsed_base_url(&self) -> ClientResult<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)
            .map_err(|e| ClientError::Config(format!("Invalid base URL {raw}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::Config(format!("Base URL cannot hold paths: {raw}")));
        }
        Ok(url)
    }

    /// Base URL with the image segment appended.
    pub fn image_path(&self) -> ClientResult<String> {
        Ok(format!("{}{}", self.parsed_base_url()?, IMAGE_SEGMENT))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
