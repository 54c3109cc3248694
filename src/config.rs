// src/config.rs
//! App configuration: TOML file with env overrides. Missing or malformed
//! config falls back to built-in defaults with a warning; the journal must
//! come up even on a fresh checkout.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::store::RECORDS_KEY;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.toml";
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_DIR: &str = "data";

pub const ENV_CONFIG_PATH: &str = "CHECKLIST_CONFIG_PATH";
pub const ENV_BIND: &str = "CHECKLIST_BIND";
pub const ENV_DATA_DIR: &str = "CHECKLIST_DATA_DIR";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Address the HTTP server binds, e.g. "127.0.0.1:8080".
    pub bind: String,
    /// Directory holding the records file.
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl AppConfig {
    /// Resolve config: file (path from `CHECKLIST_CONFIG_PATH` or the
    /// default location), then env overrides on top.
    pub fn load() -> Self {
        let path = env::var(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let mut cfg = Self::from_toml(&path);

        if let Ok(bind) = env::var(ENV_BIND) {
            if !bind.trim().is_empty() {
                cfg.bind = bind;
            }
        }
        if let Ok(dir) = env::var(ENV_DATA_DIR) {
            if !dir.trim().is_empty() {
                cfg.data_dir = PathBuf::from(dir);
            }
        }
        cfg
    }

    /// Parse a TOML config file; defaults on any failure.
    pub fn from_toml(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Full path of the persisted records file. The stem is the storage
    /// key the journal has always used.
    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(format!("{RECORDS_KEY}.json"))
    }
}
