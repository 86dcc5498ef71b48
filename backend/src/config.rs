//! Service configuration file support.
//!
//! Configuration is read from a TOML file and then overridden by a few
//! environment variables:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! body_limit_bytes = 1048576
//!
//! [validation]
//! semester_min = 1
//! semester_max = 8
//!
//! [store]
//! seed_sample_data = false
//! ```
//!
//! # Environment Variables
//!
//! - `GRADEBOOK_CONFIG`: explicit path to the config file
//! - `HOST`: overrides `server.host`
//! - `PORT`: overrides `server.port`

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::validation::ValidationRules;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "GRADEBOOK_CONFIG";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

/// Limits enforced on result writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_semester_min")]
    pub semester_min: i64,
    #[serde(default = "default_semester_max")]
    pub semester_max: i64,
}

/// In-memory store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Load the demo results at start-up.
    #[serde(default)]
    pub seed_sample_data: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_semester_min() -> i64 {
    1
}

fn default_semester_max() -> i64 {
    8
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            semester_min: default_semester_min(),
            semester_max: default_semester_max(),
        }
    }
}

impl ValidationSettings {
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            semester_min: self.semester_min,
            semester_max: self.semester_max,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Locate the config file.
    ///
    /// `GRADEBOOK_CONFIG` wins if set; otherwise searches for `gradebook.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        [
            PathBuf::from("gradebook.toml"),
            PathBuf::from("backend/gradebook.toml"),
            PathBuf::from("../gradebook.toml"),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// Load from the default location, falling back to built-in defaults when
    /// no file is found, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                log::info!("No gradebook.toml found, using default configuration");
                Self::default()
            }
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST` and `PORT` from the environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            if !host.trim().is_empty() {
                self.server.host = host.trim().to_string();
            }
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("PORT must be a valid port number, got '{}'", port)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must not be 0".to_string()));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::Invalid(
                "server.body_limit_bytes must be greater than 0".to_string(),
            ));
        }
        if self.validation.semester_min > self.validation.semester_max {
            return Err(ConfigError::Invalid(format!(
                "validation.semester_min ({}) is greater than validation.semester_max ({})",
                self.validation.semester_min, self.validation.semester_max
            )));
        }
        Ok(())
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
