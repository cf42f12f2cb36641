//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$OIG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/open-in-github/config.toml`
//! 3. `~/.open-in-github/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing and before writing
//! (e.g., `default_branch` must be a valid branch name).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::BranchName;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// default_branch = "main"
/// browser = "firefox"
/// print_only = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Branch used when `.git/HEAD` cannot be resolved
    pub default_branch: Option<String>,

    /// Application to open URLs with instead of the system default
    pub browser: Option<String>,

    /// Print URLs instead of opening them
    pub print_only: Option<bool>,
}

impl GlobalConfig {
    /// Keys accepted by [`GlobalConfig::get`] and [`GlobalConfig::set`].
    pub const KEYS: &'static [&'static str] = &["default_branch", "browser", "print_only"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(branch) = &self.default_branch {
            BranchName::new(branch).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid default_branch: {}", e))
            })?;
        }

        if let Some(browser) = &self.browser {
            if browser.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "browser cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Read a value by key, rendered as text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys not in [`GlobalConfig::KEYS`].
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "default_branch" => Ok(self.default_branch.clone()),
            "browser" => Ok(self.browser.clone()),
            "print_only" => Ok(self.print_only.map(|v| v.to_string())),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a value by key from text, validating the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` or `ConfigError::InvalidValue`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "default_branch" => updated.default_branch = Some(value.to_string()),
            "browser" => updated.browser = Some(value.to_string()),
            "print_only" => {
                let parsed = value.parse::<bool>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "print_only must be 'true' or 'false', got '{}'",
                        value
                    ))
                })?;
                updated.print_only = Some(parsed);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let config = GlobalConfig::default();
        assert!(config.default_branch.is_none());
        assert!(config.browser.is_none());
        assert!(config.print_only.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let config: GlobalConfig = toml::from_str(
            r#"
            default_branch = "develop"
            browser = "firefox"
            print_only = true
            "#,
        )
        .unwrap();

        assert_eq!(config.default_branch.as_deref(), Some("develop"));
        assert_eq!(config.browser.as_deref(), Some("firefox"));
        assert_eq!(config.print_only, Some(true));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("mySetting = \"default\"");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_default_branch_rejected() {
        let config = GlobalConfig {
            default_branch: Some("bad..name".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn blank_browser_rejected() {
        let config = GlobalConfig {
            browser: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn set_and_get() {
        let mut config = GlobalConfig::default();
        config.set("default_branch", "trunk").unwrap();
        config.set("print_only", "true").unwrap();

        assert_eq!(config.get("default_branch").unwrap().as_deref(), Some("trunk"));
        assert_eq!(config.get("print_only").unwrap().as_deref(), Some("true"));
        assert_eq!(config.get("browser").unwrap(), None);
    }

    #[test]
    fn set_invalid_leaves_config_unchanged() {
        let mut config = GlobalConfig::default();
        config.set("default_branch", "main").unwrap();

        assert!(config.set("default_branch", "has space").is_err());
        assert!(config.set("print_only", "yes").is_err());
        assert_eq!(config.default_branch.as_deref(), Some("main"));
        assert!(config.print_only.is_none());
    }

    #[test]
    fn unknown_key() {
        let mut config = GlobalConfig::default();
        assert!(matches!(
            config.get("remote"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            config.set("remote", "upstream"),
            Err(ConfigError::UnknownKey(_))
        ));
    }
}
