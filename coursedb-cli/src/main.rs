//! coursedb CLI
//!
//! Command-line interface for reading courses, modules and clips out of a
//! course store.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { json, modules_only } => {
            commands::list::run_list(cli.db, json, modules_only)
        }
        Commands::Count => commands::count::run_count(cli.db),
        Commands::Check => commands::check::run_check(cli.db),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.db),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetStore { path } => commands::config::run_config_set_store(&path),
            ConfigAction::ClearStore => commands::config::run_config_clear_store(),
        },
    }
}
