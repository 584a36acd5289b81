//! Server configuration file support.
//!
//! This module provides utilities for reading server configuration from a
//! TOML file (`hostmap.toml`) with environment variable overrides. Both the
//! file and every key in it are optional; built-in defaults match the
//! original deployment (bind 0.0.0.0:8080, data under `data/`).

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Server configuration from file and environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Dataset settings for the detailed dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    /// CSV file backing the detailed dashboard. A missing file is not an
    /// error; the built-in table is used instead.
    #[serde(default = "default_data_file")]
    pub file: PathBuf,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            file: default_data_file(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/locations.csv")
}

impl ServerConfig {
    /// Load server configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load server configuration from the default locations.
    ///
    /// Searches for `hostmap.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Falls back to built-in defaults when no file exists. A file that
    /// exists but fails to parse is still an error.
    pub fn load() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("hostmap.toml"),
            PathBuf::from("config/hostmap.toml"),
            PathBuf::from("../hostmap.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment variable overrides.
    ///
    /// - `HOST`: bind host
    /// - `PORT`: bind port (ignored if unparseable)
    /// - `HOSTMAP_DATA`: CSV file for the detailed dashboard
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(file) = env::var("HOSTMAP_DATA") {
            self.dataset.file = PathBuf::from(file);
        }
        self
    }

    /// Bind address in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
