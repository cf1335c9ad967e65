use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable that overrides the default data root.
pub const DATA_DIR_ENV: &str = "DAYLOG_DATA_DIR";

fn default_log_level() -> String {
    "info".to_string()
}

// ── Settings ───────────────────────────────────────────────────────────────────

/// Persisted analyzer settings, stored at `~/.daylog/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root of the `YYYY/MM/DD/events.jsonl` tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_root: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_root: None,
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Return the default path to the settings file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&home_dir())
    }

    /// Return the settings path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &Path) -> PathBuf {
        base_dir.join(".daylog").join("config.json")
    }

    /// Load settings from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Atomically write settings to `path`, creating parent directories if
    /// needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Resolve the data root.
    ///
    /// Order: explicit `data_root`, then `$DAYLOG_DATA_DIR`, then
    /// `~/.daylog/data`.
    pub fn resolve_data_root(&self) -> PathBuf {
        self.resolve_data_root_with(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from), &home_dir())
    }

    /// [`resolve_data_root`](Self::resolve_data_root) with the environment
    /// override and home directory supplied by the caller.
    pub fn resolve_data_root_with(&self, env_override: Option<PathBuf>, home: &Path) -> PathBuf {
        if let Some(root) = &self.data_root {
            return root.clone();
        }
        if let Some(root) = env_override.filter(|p| !p.as_os_str().is_empty()) {
            return root;
        }
        home.join(".daylog").join("data")
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
