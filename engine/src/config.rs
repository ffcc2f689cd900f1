//! User configuration loaded from `~/.featurecards/config.toml`.
//!
//! Only UI preferences live here; a missing file means defaults.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use featurecards_types::ui::UiOptions;

pub const REDUCED_MOTION_ENV: &str = "FEATURECARDS_REDUCED_MOTION";

/// Contents of `~/.featurecards/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FeatureCardsConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the divider and scrollbar.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Show the list at its final height immediately instead of easing.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl FeatureCardsConfig {
    /// Load the user config. `Ok(None)` when there is no home dir or no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve UI options from the file, then apply environment overrides.
    #[must_use]
    pub fn ui_options(config: Option<&Self>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        let mut options = UiOptions {
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
            reduced_motion: app.is_some_and(|app| app.reduced_motion),
        };

        let env_value = env::var(REDUCED_MOTION_ENV).ok();
        if let Some(reduced) = parse_flag(env_value.as_deref()) {
            options.reduced_motion = reduced;
        }
        options
    }
}

/// Interpret an env flag. Unset or unrecognized values yield `None`.
pub(crate) fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognized {REDUCED_MOTION_ENV} value: {other}");
            None
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".featurecards").join("config.toml"))
}
