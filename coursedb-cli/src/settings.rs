//! Application settings: where the course store lives.
//!
//! The settings file is `~/.config/coursedb/settings.toml`:
//!
//! ```toml
//! [store]
//! path = "/path/to/store.db"
//! ```

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that names the course store.
pub(crate) const STORE_ENV: &str = "COURSEDB_STORE";

/// Canonical path to the settings file: `~/.config/coursedb/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("coursedb").join("settings.toml")
}

/// Where a resolved store path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoreSource {
    Flag,
    Env,
    SettingsFile,
}

impl fmt::Display for StoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--db flag"),
            Self::Env => write!(f, "{} environment variable", STORE_ENV),
            Self::SettingsFile => write!(f, "settings.toml"),
        }
    }
}

/// Resolve the store path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `COURSEDB_STORE` environment variable
/// 3. Saved `store.path` in `settings.toml`
pub(crate) fn resolve_store_path(cli_override: Option<PathBuf>) -> Option<(PathBuf, StoreSource)> {
    resolve_with(
        cli_override,
        std::env::var(STORE_ENV).ok(),
        &settings_path(),
    )
}

fn resolve_with(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    settings: &Path,
) -> Option<(PathBuf, StoreSource)> {
    if let Some(p) = cli_override {
        return Some((p, StoreSource::Flag));
    }
    if let Some(v) = env_value.filter(|v| !v.is_empty()) {
        return Some((PathBuf::from(v), StoreSource::Env));
    }
    load_store_path(settings).map(|p| (p, StoreSource::SettingsFile))
}

/// Read `store.path` from a settings file, if set.
pub(crate) fn load_store_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("store")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Set `store.path` in the settings file, or remove it when `path` is `None`.
///
/// Only the `[store]` table is touched; any other sections in the file are
/// written back as they were. A missing or unparsable file starts empty.
pub(crate) fn save_store_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings file is not a TOML table"))?;
    let store = table
        .entry("store")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let store_table = store
        .as_table_mut()
        .ok_or_else(|| io::Error::other("`store` in the settings file is not a table"))?;

    match path {
        Some(p) => {
            store_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            store_table.remove("path");
        }
    }

    // Replace via rename so a failed write leaves the old settings in place.
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(settings: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
