//! Configuration handling for the form builder

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::session::DEFAULT_AUTOSAVE_DELAY;

/// Environment variable overriding the storage directory
pub const STORAGE_DIR_ENV: &str = "FORM_FORGE_STORAGE_DIR";

/// User configuration for the form builder
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BuilderConfig {
    /// Directory holding the saved forms and the current form
    pub storage_dir: Option<PathBuf>,
    /// Quiet period before an edit is autosaved, in milliseconds
    pub autosave_delay_ms: Option<u64>,
    /// Number of undo steps kept
    pub history_limit: Option<usize>,
    /// Directory exports are written to
    pub export_dir: Option<PathBuf>,
}

impl BuilderConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "formforge", "form-forge")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Storage directory: environment override, then the config value, then
    /// the platform data directory
    pub fn storage_dir(&self) -> PathBuf {
        if let Some(dir) = std::env::var_os(STORAGE_DIR_ENV) {
            return PathBuf::from(dir);
        }
        self.storage_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from(".form-forge"))
    }

    pub fn autosave_delay(&self) -> Duration {
        self.autosave_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_AUTOSAVE_DELAY)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
