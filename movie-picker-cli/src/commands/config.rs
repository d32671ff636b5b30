use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_picker_lib::Settings;
use movie_picker_lib::settings::settings_path;

use super::DataSources;
use crate::error::CliError;

/// Show the settings file status, the resolved data paths, and the
/// effective settings.
pub(crate) fn run_config_show(settings: &Settings, sources: &DataSources) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "movie-picker Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

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
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for (name, file) in [("titles", &sources.titles), ("credits", &sources.credits)] {
        let status = if file.exists() { "found" } else { "missing" };
        log::info!(
            "  {} {} {}",
            format!("{name}:").if_supports_color(Stdout, |t| t.cyan()),
            file.display(),
            format!("({status})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    for line in settings.to_toml_string()?.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
