//! config command - Get, set, or list configuration values

use crate::core::config::{Config, GlobalConfig};
use crate::engine::Context;
use crate::ui::output::{self, format_entry, Verbosity};
use anyhow::{Context as _, Result};

/// Get a configuration value.
///
/// Prints nothing when the key is valid but unset.
pub fn get(_ctx: &Context, key: &str) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    if let Some(value) = config.global.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value.
///
/// Writes back to the file the value was loaded from, so later loads see
/// the change.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load().context("Failed to load config")?;
    config.global.set(key, value)?;
    let path = config.save().context("Failed to write config")?;
    tracing::debug!(path = %path.display(), key, "config updated");

    output::print(
        format!("Set {} = {}", key, value),
        Verbosity::from_flags(ctx.quiet, ctx.debug),
    );
    Ok(())
}

/// List all configuration values.
pub fn list(_ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    println!("# open-in-github configuration");
    for key in GlobalConfig::KEYS {
        println!("{}", format_entry(key, config.global.get(key)?));
    }

    Ok(())
}

/// Show the loaded and write locations.
pub fn path(_ctx: &Context) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;

    println!(
        "{}",
        format_entry(
            "loaded_from",
            config.loaded_from().map(|p| p.display().to_string())
        )
    );
    println!("write_path = {}", config.save_path()?.display());

    Ok(())
}
