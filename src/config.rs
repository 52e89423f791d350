// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Layered runtime configuration: TOML file, then environment, then CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::render::CinematicTimings;
use crate::shell::{TerminalOptions, Theme};

pub const CONFIG_ENV: &str = "TERMFOLIO_CONFIG";
pub const DATA_DIR_ENV: &str = "TERMFOLIO_DATA_DIR";
pub const DOWNLOAD_DIR_ENV: &str = "TERMFOLIO_DOWNLOAD_DIR";
pub const THEME_ENV: &str = "TERMFOLIO_THEME";

/// Slowest accepted reveal interval per character.
pub const MAX_TYPING_SPEED_MS: u64 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TermConfig {
    /// Content directory; the compiled-in content set when absent.
    pub data_dir: Option<PathBuf>,
    pub download_dir: PathBuf,
    pub typing_speed_ms: u64,
    pub theme: Theme,
    pub sound: bool,
    pub prompt: Option<String>,
    pub welcome: bool,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            download_dir: PathBuf::from("./downloads"),
            typing_speed_ms: 50,
            theme: Theme::Dark,
            sound: false,
            prompt: None,
            welcome: true,
            seed: None,
            log_file: None,
        }
    }
}

impl TermConfig {
    /// Parse a TOML file. Relative paths are rebased onto its directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg: TermConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.rebase_paths(path);
        cfg.validate()?;
        debug!("loaded config {}", path.display());
        Ok(cfg)
    }

    /// File named by `explicit` or `TERMFOLIO_CONFIG` (defaults otherwise),
    /// with environment overrides applied.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut cfg = match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup(DOWNLOAD_DIR_ENV) {
            self.download_dir = PathBuf::from(dir);
        }
        if let Some(theme) = lookup(THEME_ENV) {
            self.theme = theme.parse().map_err(|reason| ConfigError::Invalid {
                key: THEME_ENV.to_string(),
                reason,
            })?;
        }
        Ok(())
    }

    /// Reject values no layer may set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_speed_ms > MAX_TYPING_SPEED_MS {
            return Err(ConfigError::Invalid {
                key: "typing_speed_ms".to_string(),
                reason: format!("{} ms is too slow to be useful", self.typing_speed_ms),
            });
        }
        Ok(())
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn terminal_options(&self) -> TerminalOptions {
        TerminalOptions {
            typing_interval: self.typing_interval(),
            theme: self.theme,
            prompt: self.prompt.clone(),
            seed: self.seed,
            cinematic: CinematicTimings {
                per_char: self.typing_interval(),
                ..CinematicTimings::default()
            },
        }
    }

    fn rebase_paths(&mut self, path: &Path) {
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        if let Some(dir) = &mut self.data_dir {
            *dir = join_base(base, dir);
        }
        self.download_dir = join_base(base, &self.download_dir);
        if let Some(file) = &mut self.log_file {
            *file = join_base(base, file);
        }
    }
}

fn join_base(base: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}
