//! # Configuration
//!
//! Optional `h2o-habits.yaml` next to the working directory. Every field has
//! a default, so a missing file (or a partial one) is fine.
//!
//! ```yaml
//! database_path: h2o_habits.db
//! bind_address: 127.0.0.1
//! port: 3000
//! log_level: info
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::Level;

pub const CONFIG_FILE_NAME: &str = "h2o-habits.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file holding entries and settings
    pub database_path: PathBuf,
    pub bind_address: IpAddr,
    pub port: u16,
    /// One of trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("h2o_habits.db"),
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Load `h2o-habits.yaml` from the current working directory
    pub fn load_default() -> Result<Self> {
        Self::load(Path::new(CONFIG_FILE_NAME))
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Parsed log level; unknown values fall back to INFO
    pub fn tracing_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
