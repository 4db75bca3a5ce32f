//! Startup configuration.
//!
//! Loaded once from an optional TOML file, with the geocoder credential
//! overridable from a `.env` file and then from the process environment,
//! then passed by reference to whatever needs it.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

/// Environment variable holding the location-lookup API key.
pub const API_KEY_ENV: &str = "OPENCAGE_API_KEY";

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "kundli.toml";

/// Dotenv file looked up in the working directory.
pub const DOTENV_FILE: &str = ".env";

pub const DEFAULT_ENDPOINT: &str = "https://api.opencagedata.com/geocode/v1/json";

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse(String),
    /// No API key configured for location lookup.
    MissingCredential,
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "cannot read config {}: {message}", path.display())
            }
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::MissingCredential => write!(
                f,
                "location lookup API key is missing; \
                 set {API_KEY_ENV} or geocoder.api_key in {DEFAULT_CONFIG_FILE}"
            ),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// `[geocoder]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeocoderConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_size_px() -> u32 {
    800
}

fn default_output() -> PathBuf {
    PathBuf::from("kundli.svg")
}

/// `[chart]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    #[serde(default = "default_size_px")]
    pub size_px: u32,
    /// Overrides the default chart title.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size_px: default_size_px(),
            title: None,
            output: default_output(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KundliConfig {
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl KundliConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Load `path` if given, else `kundli.toml` when present, else defaults;
    /// then apply `.env` when present, then the process environment.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)?
                } else {
                    Self::default()
                }
            }
        };
        let dotenv = Path::new(DOTENV_FILE);
        if dotenv.is_file() {
            cfg.apply_dotenv(dotenv)?;
        }
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Apply overrides from a dotenv file without touching the process
    /// environment.
    pub fn apply_dotenv(&mut self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |e: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let dotenv_error = |e: dotenvy::Error| match e {
            dotenvy::Error::Io(e) => io_error(e),
            other => ConfigError::Parse(format!("{}: {other}", path.display())),
        };
        let vars = dotenvy::from_path_iter(path)
            .map_err(dotenv_error)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(dotenv_error)?;
        debug!("loaded {} variables from {}", vars.len(), path.display());
        self.apply_env(|key| vars.get(key).cloned());
        Ok(())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            debug!("{API_KEY_ENV} set in environment");
            self.geocoder.api_key = Some(key);
        }
    }

    /// The configured API key, or `MissingCredential` when absent or blank.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.geocoder
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingCredential)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.geocoder.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("geocoder.endpoint must not be empty"));
        }
        if self.geocoder.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "geocoder.timeout_secs must be greater than zero",
            ));
        }
        if self.chart.size_px < 100 {
            return Err(ConfigError::Invalid("chart.size_px must be at least 100"));
        }
        Ok(())
    }
}
