//! Runtime configuration for the server binary.

use crate::store::StoreConfig;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the backing data file.
const DATA_ENV: &str = "TODOFILE_DATA";

/// Environment variable naming the listen address.
const ADDR_ENV: &str = "TODOFILE_ADDR";

/// Server configuration, read from the environment with defaults.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub addr: String,

    /// Path to the backing JSON file.
    pub data_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            data_path: StoreConfig::default().path,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: env::var(ADDR_ENV).unwrap_or(defaults.addr),
            data_path: env::var(DATA_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
        }
    }
}
