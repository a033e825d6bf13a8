use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{
    load_settings_string, resolve_store_path, save_store_path, settings_path,
};

/// Show the settings file and the store path that would be used.
pub(crate) fn run_config_show(db: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "coursedb Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    match resolve_store_path(db) {
        Some((store, source)) => {
            log::info!("  Store:         {} (from {})", store.display(), source);
        }
        None => {
            log::info!(
                "  Store:         {}",
                "not configured".if_supports_color(Stdout, |t| t.yellow()),
            );
        }
    }

    if let Some(contents) = load_settings_string(&path) {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

pub(crate) fn run_config_set_store(store: &Path) -> Result<(), CliError> {
    let store = std::path::absolute(store)?;
    if !store.is_file() {
        log::warn!("{} does not exist (saving anyway)", store.display());
    }
    let path = settings_path();
    save_store_path(&path, Some(&store))
        .map_err(|e| CliError::config(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Saved store path {} to {}", store.display(), path.display());
    Ok(())
}

pub(crate) fn run_config_clear_store() -> Result<(), CliError> {
    let path = settings_path();
    if !path.exists() {
        log::info!("No settings file at {}; nothing to clear.", path.display());
        return Ok(());
    }
    save_store_path(&path, None)
        .map_err(|e| CliError::config(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Cleared store path from {}", path.display());
    Ok(())
}
