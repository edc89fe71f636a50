use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub news_api: NewsApiSettings,
    #[serde(default)]
    pub relay: RelaySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[validate(range(min = 1))]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

/// Upstream news search API
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewsApiSettings {
    #[serde(default = "default_base_url")]
    #[validate(length(min = 1))]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[validate(range(min = 1))]
    pub request_timeout_secs: Option<u64>,
}

impl NewsApiSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_base_url() -> String { "https://newsapi.org/v2".to_string() }
fn default_language() -> String { "en".to_string() }

/// Relay behaviour
///
/// `enable_relevance_filter = false` with `page_size = 5` reproduces the
/// legacy unfiltered endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RelaySettings {
    #[serde(default = "default_enable_relevance_filter")]
    pub enable_relevance_filter: bool,
    // NewsAPI caps pageSize at 100
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u8,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            enable_relevance_filter: default_enable_relevance_filter(),
            page_size: default_page_size(),
        }
    }
}

fn default_enable_relevance_filter() -> bool { true }
fn default_page_size() -> u8 { 20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with NEWS_RELAY_)
    /// 5. NEWS_API_KEY for the upstream API key
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NEWS_RELAY_SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        Self::from_config(apply_env_overrides(settings)?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::from_config(apply_env_overrides(settings)?)
    }

    /// Deserialize and validate an already assembled configuration
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.ensure_valid()?;
        Ok(settings)
    }

    fn ensure_valid(&self) -> Result<(), ConfigError> {
        self.server
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid server settings: {}", e)))?;
        self.news_api
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid news_api settings: {}", e)))?;
        self.relay
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid relay settings: {}", e)))?;
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("NEWS_RELAY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Apply well-known environment variables on top of the loaded config
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = std::env::var("NEWS_API_KEY") {
        builder = builder.set_override("news_api.api_key", api_key)?;
    }

    builder.build()
}
