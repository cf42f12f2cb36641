//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! open-in-github has a single, user-level configuration scope. Values are
//! resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. `$OIG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/open-in-github/config.toml`
//! 3. `~/.open-in-github/config.toml` (canonical write location)
//!
//! Writes go back to the file that was loaded. When none was found they go
//! to `$OIG_CONFIG` if set, otherwise to the canonical location.
//!
//! # Example
//!
//! ```no_run
//! use open_in_github::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Default branch: {}", config.default_branch());
//! println!("Print only: {}", config.print_only());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "OIG_CONFIG";

/// Branch used when none is configured and HEAD cannot be resolved.
pub const FALLBACK_BRANCH: &str = "main";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key '{0}'")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration with defaults applied by the accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing file is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let global = Self::read_global_config(path)?;
        global.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        // 1. Check $OIG_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/open-in-github/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("open-in-github/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.open-in-github/config.toml
        let path = dirs::home_dir()?.join(".open-in-github/config.toml");
        path.exists().then_some(path)
    }

    /// Read and parse a config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the path config writes go to.
    ///
    /// Returns `$OIG_CONFIG` if set, else `~/.open-in-github/config.toml`.
    pub fn write_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".open-in-github/config.toml"))
    }

    /// Path that writes for this configuration go to.
    ///
    /// The loaded file if there was one, otherwise [`Config::write_path`].
    pub fn save_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Self::write_path(),
        }
    }

    /// Validate and write `global` atomically to [`Config::save_path`].
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = self.save_path()?;
        Self::write_to(&path, &self.global)?;
        Ok(path)
    }

    /// Validate and write a config file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames it over the target.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Branch used when HEAD cannot be resolved.
    ///
    /// Defaults to "main" if not configured.
    pub fn default_branch(&self) -> &str {
        self.global
            .default_branch
            .as_deref()
            .unwrap_or(FALLBACK_BRANCH)
    }

    /// Application to open URLs with, if configured.
    pub fn browser(&self) -> Option<&str> {
        self.global.browser.as_deref()
    }

    /// Check if URLs should be printed instead of opened.
    ///
    /// Defaults to `false` if not configured.
    pub fn print_only(&self) -> bool {
        self.global.print_only.unwrap_or(false)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
