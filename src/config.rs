//! Runtime configuration.
//!
//! Settings come from an optional TOML file (default `aira.toml`); every
//! field has a default, so a missing file is fine. API secrets are read
//! from the environment (`AQI_TOKEN`, `GISTDA_KEY`), loading `.env` first.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::i18n::Language;
use crate::logging::LogLevel;
use crate::stations::{BoundingBox, THAILAND_BOUNDS};

pub const DEFAULT_CONFIG_PATH: &str = "aira.toml";

pub const AQI_TOKEN_VAR: &str = "AQI_TOKEN";
pub const GISTDA_KEY_VAR: &str = "GISTDA_KEY";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaqiConfig {
    pub base_url: String,
    /// `"south,west,north,east"`
    pub bounds: String,
    pub timeout_secs: u64,
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for WaqiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.waqi.info".to_string(),
            bounds: THAILAND_BOUNDS.to_latlng_param(),
            timeout_secs: 30,
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FloodConfig {
    /// Local path prefix the map uses for tile requests.
    pub proxy_prefix: String,
    /// Where the proxy forwards to.
    pub upstream_url: String,
    pub layer: String,
    #[serde(skip)]
    pub key: Option<String>,
}

impl Default for FloodConfig {
    fn default() -> Self {
        Self {
            proxy_prefix: "/gistda-proxy".to_string(),
            upstream_url: "https://sphere.gistda.or.th/services".to_string(),
            layer: "flood_daily".to_string(),
            key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `"en"` or `"th"`.
    pub language: String,
    pub waqi: WaqiConfig,
    pub flood: FloodConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            waqi: WaqiConfig::default(),
            flood: FloodConfig::default(),
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse { path: String, message: String },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "Cannot read config {}: {}", path, source),
            ConfigError::Parse { path, message } => {
                write!(f, "Invalid TOML in {}: {}", path, message)
            }
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Config {
    /// Parses and validates TOML text. Secrets are left unset.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists, otherwise starts from defaults, then
    /// fills secrets from the environment.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        dotenv::dotenv().ok();

        let mut config = if path.exists() {
            let display = path.display().to_string();
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: display.clone(),
                source,
            })?;
            Config::from_toml_str(&text, &display)?
        } else {
            Config::default()
        };

        config.waqi.token = non_empty_env(AQI_TOKEN_VAR);
        config.flood.key = non_empty_env(GISTDA_KEY_VAR);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.language.parse::<Language>().map_err(ConfigError::Invalid)?;
        self.log_level()?;
        if BoundingBox::parse(&self.waqi.bounds).is_none() {
            return Err(ConfigError::Invalid(format!(
                "waqi.bounds '{}' is not 'south,west,north,east'",
                self.waqi.bounds
            )));
        }
        if self.waqi.timeout_secs == 0 {
            return Err(ConfigError::Invalid("waqi.timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.language.parse().unwrap_or_default()
    }

    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log.level.parse().map_err(ConfigError::Invalid)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language(), Language::Th);
        assert_eq!(config.waqi.bounds, "5.61,97.34,20.46,105.63");
        assert_eq!(config.flood.layer, "flood_daily");
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("", "empty.toml").expect("empty TOML is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let text = r#"
            language = "en"

            [waqi]
            timeout_secs = 5

            [log]
            level = "debug"
            file = "aira.log"
        "#;
        let config = Config::from_toml_str(text, "test.toml").expect("valid config");
        assert_eq!(config.language(), Language::En);
        assert_eq!(config.waqi.timeout_secs, 5);
        assert_eq!(config.waqi.base_url, "https://api.waqi.info");
        assert_eq!(config.log_level().expect("valid level"), LogLevel::Debug);
        assert_eq!(config.log.file.as_deref(), Some("aira.log"));
    }

    #[test]
    fn test_unsupported_language_rejected() {
        let err = Config::from_toml_str("language = \"fr\"", "test.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {:?}", err);
    }

    #[test]
    fn test_bad_bounds_rejected() {
        let err = Config::from_toml_str("[waqi]\nbounds = \"1,2\"", "test.toml").unwrap_err();
        assert!(err.to_string().contains("waqi.bounds"));
    }

    #[test]
    fn test_malformed_toml_reports_origin() {
        let err = Config::from_toml_str("language = ", "broken.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == "broken.toml"));
    }

    #[test]
    fn test_secrets_are_never_read_from_file() {
        let config = Config::from_toml_str("[waqi]\ntoken = \"leaked\"", "test.toml")
            .expect("unknown keys are ignored");
        assert_eq!(config.waqi.token, None);
    }
}
