pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod count;
pub(crate) mod list;

use std::path::PathBuf;

use coursedb_db::CatalogStore;

use crate::CliError;
use crate::settings::{STORE_ENV, resolve_store_path};

/// Resolve the store path from flag, environment or settings.
pub(crate) fn open_store(db: Option<PathBuf>) -> Result<CatalogStore, CliError> {
    let (path, source) = resolve_store_path(db).ok_or_else(|| {
        CliError::config(format!(
            "No course store configured. Pass --db, set {}, or run 'coursedb config set-store <PATH>'.",
            STORE_ENV,
        ))
    })?;
    log::debug!("Using store {} (from {})", path.display(), source);
    Ok(CatalogStore::new(path))
}
