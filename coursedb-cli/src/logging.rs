//! Logger setup. Command output goes through `log::info!`, so info lines are
//! printed bare and only warnings and errors get a prefix.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stdout);

    if quiet {
        builder.filter_level(LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    builder.format(move |buf, record| match record.level() {
        Level::Info if !verbose => writeln!(buf, "{}", record.args()),
        Level::Warn => writeln!(
            buf,
            "{} {}",
            "warning:".if_supports_color(Stdout, |t| t.yellow()),
            record.args(),
        ),
        Level::Error => writeln!(
            buf,
            "{} {}",
            "error:".if_supports_color(Stdout, |t| t.red()),
            record.args(),
        ),
        level => writeln!(
            buf,
            "[{} {:<5}] {}",
            buf.timestamp(),
            level,
            record.args(),
        ),
    });

    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
