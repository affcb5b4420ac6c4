use directories::ProjectDirs;
use mt_core::QuizSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_NAME: &str = "multitainment";
const ORG_NAME: &str = "practice";
const CONFIG_FILE: &str = "settings.json";

/// Startup defaults. Read once, never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub quiz: QuizSettings,
    /// Fixes the question sequence across rounds, mainly for demos.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", ORG_NAME, APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// `Ok(None)` when the file does not exist.
pub fn load_from(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

pub fn load_or_default_from(path: &Path) -> AppConfig {
    match load_from(path) {
        Ok(Some(config)) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Ok(None) => AppConfig::default(),
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            AppConfig::default()
        }
    }
}

pub fn load_or_default() -> AppConfig {
    match config_path() {
        Some(path) => load_or_default_from(&path),
        None => {
            tracing::warn!("could not determine config directory; using defaults");
            AppConfig::default()
        }
    }
}
