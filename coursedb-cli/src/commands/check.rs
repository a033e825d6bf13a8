use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use coursedb_db::REQUIRED_TABLES;

use crate::CliError;

use super::open_store;

/// Verify the store has every table the catalog reader needs.
pub(crate) fn run_check(db: Option<PathBuf>) -> Result<(), CliError> {
    let store = open_store(db)?;

    log::info!(
        "{}",
        "Course Store Check".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Store: {}", store.path().display());
    crate::log_blank();

    let missing = store.missing_tables()?;
    for table in REQUIRED_TABLES {
        if missing.contains(&table) {
            log::info!(
                "  {:<20} {}",
                table,
                "missing".if_supports_color(Stdout, |t| t.red()),
            );
        } else {
            log::info!(
                "  {:<20} {}",
                table,
                "ok".if_supports_color(Stdout, |t| t.green()),
            );
        }
    }

    if !missing.is_empty() {
        return Err(CliError::other(format!(
            "Store is missing {} of {} required tables",
            missing.len(),
            REQUIRED_TABLES.len(),
        )));
    }

    crate::log_blank();
    log::info!("  Courses: {:>8}", store.course_count()?);
    log::info!("  Clips:   {:>8}", store.clip_count()?);

    Ok(())
}
