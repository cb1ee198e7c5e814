use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub geocoder: GeocoderSettings,
    #[serde(default)]
    pub overpass: OverpassSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
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
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderSettings {
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,
    /// Nominatim's usage policy requires an identifying User-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_geocoder_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            user_agent: default_user_agent(),
            timeout_secs: default_geocoder_timeout(),
        }
    }
}

fn default_geocoder_endpoint() -> String { "https://nominatim.openstreetmap.org".to_string() }
fn default_user_agent() -> String { format!("settled/{}", env!("CARGO_PKG_VERSION")) }
fn default_geocoder_timeout() -> u64 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassSettings {
    #[serde(default = "default_overpass_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_overpass_timeout")]
    pub timeout_secs: u64,
}

impl Default for OverpassSettings {
    fn default() -> Self {
        Self {
            endpoint: default_overpass_endpoint(),
            timeout_secs: default_overpass_timeout(),
        }
    }
}

fn default_overpass_endpoint() -> String { "https://overpass-api.de/api/interpreter".to_string() }
fn default_overpass_timeout() -> u64 { 25 }

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
    /// 3. Environment variables (prefixed with SETTLED_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SETTLED_)
            // e.g., SETTLED_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SETTLED")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SETTLED")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geocoder_settings() {
        let geocoder = GeocoderSettings::default();
        assert_eq!(geocoder.timeout_secs, 5);
        assert!(geocoder.endpoint.contains("nominatim"));
        assert!(geocoder.user_agent.starts_with("settled/"));
    }

    #[test]
    fn test_default_overpass_settings() {
        let overpass = OverpassSettings::default();
        assert!(overpass.endpoint.contains("overpass"));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
