use std::path::PathBuf;

use crate::CliError;

use super::open_store;

pub(crate) fn run_count(db: Option<PathBuf>) -> Result<(), CliError> {
    let store = open_store(db)?;
    let count = store.clip_count()?;
    log::info!("{}", count);
    Ok(())
}
