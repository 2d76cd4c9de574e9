//! Process configuration read once from the environment at startup.
//!
//! Values come from the process environment first and then from an optional
//! `.env` file in the working directory. A variable set in the process always
//! wins over the same key in `.env`.

use std::collections::HashMap;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DOTENV_FILE: &str = ".env";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to read {path:?}: {reason}")]
    Dotenv { path: PathBuf, reason: String },
}

/// How often the log file rolls over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "minutely" => Some(Self::Minutely),
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Immutable application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Title reported in the API description document
    pub app_name: String,
    pub app_version: String,
    pub app_description: String,
    /// Display name shown by the welcome endpoint
    pub participant_name: String,
    /// Host to bind the HTTP listener
    pub host: String,
    /// Port to bind the HTTP listener
    pub port: u16,
    /// Deployment label shown by the welcome endpoint
    pub environment: String,
    /// Directory for rolling log files
    pub log_dir: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub log_rotation: LogRotation,
}

fn default_app_name() -> String {
    "Token Generation API".to_string()
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_app_description() -> String {
    "API for generating tokens and checksums from text".to_string()
}

fn default_participant_name() -> String {
    "Deepak".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_version: default_app_version(),
            app_description: default_app_description(),
            participant_name: default_participant_name(),
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
            log_rotation: LogRotation::default(),
        }
    }
}

impl AppConfig {
    /// Build the config from the process environment and `./.env`
    pub fn from_env() -> Result<Self, ConfigError> {
        let dotenv = load_dotenv(Path::new(DOTENV_FILE))?;
        Self::from_sources(|key| std::env::var(key).ok(), &dotenv)
    }

    /// Build the config from a primary lookup, falling back to `.env` values
    pub fn from_sources<F>(lookup: F, dotenv: &HashMap<String, String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(|key| lookup(key).or_else(|| dotenv.get(key).cloned()))
    }

    /// Build the config from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => parse_port(value)?,
            None => default_port(),
        };

        let log_rotation = match lookup("LOG_ROTATION") {
            Some(value) => LogRotation::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: "LOG_ROTATION",
                reason: "expected one of minutely, hourly, daily, never".to_string(),
                value,
            })?,
            None => LogRotation::default(),
        };

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or_else(default_app_name),
            app_version: lookup("APP_VERSION").unwrap_or_else(default_app_version),
            app_description: lookup("APP_DESCRIPTION").unwrap_or_else(default_app_description),
            participant_name: lookup("PARTICIPANT_NAME").unwrap_or_else(default_participant_name),
            host: lookup("HOST").unwrap_or_else(default_host),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or_else(default_environment),
            log_dir: lookup("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
            log_rotation,
        })
    }

    /// Get the HTTP bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|error| ConfigError::InvalidValue {
            key: "PORT",
            value,
            reason: error.to_string(),
        })
}

/// Values from the file at `path`; a missing file yields no values.
pub fn load_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    match std::fs::File::open(path) {
        Ok(file) => parse_dotenv_at(path, file),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
        Err(error) => Err(ConfigError::Dotenv {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }),
    }
}

/// Parse `KEY=value` lines. A key repeated later in the file replaces the earlier one.
fn parse_dotenv_at<R: Read>(path: &Path, reader: R) -> Result<HashMap<String, String>, ConfigError> {
    dotenvy::from_read_iter(reader)
        .map(|entry| {
            entry.map_err(|error| ConfigError::Dotenv {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })
        })
        .collect()
}
