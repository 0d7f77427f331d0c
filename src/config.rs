// src/config.rs
//! Optional local configuration (`pathways.toml`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "pathways.toml";

/// Complexity limits for the `check` command. Zero means unlimited.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default)]
    pub max_cyclomatic: u64,
    #[serde(default)]
    pub max_npath: u64,
}

impl Limits {
    #[must_use]
    pub fn cyclomatic_exceeded(&self, complexity: u64) -> bool {
        self.max_cyclomatic > 0 && complexity > self.max_cyclomatic
    }

    #[must_use]
    pub fn npath_exceeded(&self, complexity: u64) -> bool {
        self.max_npath > 0 && complexity > self.max_npath
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
}

impl Config {
    /// Loads `pathways.toml` from the working directory. Missing or
    /// unreadable config falls back to defaults; running without a config
    /// file is the common case, not an error.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|raw| toml::from_str(&raw).ok())
            .unwrap_or_default()
    }
}
