//! Logger setup.
//!
//! User-facing output goes through `log::info!`, so the normal format is
//! the bare message. Warnings and errors get a level prefix. `--verbose`
//! switches to env_logger's timestamped format at debug level.

use std::io::Write;

use log::{Level, LevelFilter};

pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the flag-derived level.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis().format_target(false);
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }

    builder.parse_default_env();
    // A logger may already be installed (tests); keep that one.
    let _ = builder.try_init();
}
