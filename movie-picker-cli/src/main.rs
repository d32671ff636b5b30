//! movie-picker CLI
//!
//! Filters a titles/credits CSV pair by genre and release year and shows
//! the top matches.

mod cli_types;
mod commands;
mod error;
mod logging;
mod render;

use std::path::PathBuf;

use clap::Parser;

use movie_picker_lib::Settings;

use cli_types::{Cli, Commands, ConfigAction};
use commands::DataSources;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        titles,
        credits,
        command,
        ..
    } = cli;

    match command {
        Commands::Genres => {
            let (settings, sources) = resolve_sources(titles, credits)?;
            let dataset = sources.load(&settings)?;
            commands::genres::run_genres(&dataset);
        }
        Commands::Years => {
            let (settings, sources) = resolve_sources(titles, credits)?;
            let dataset = sources.load(&settings)?;
            commands::years::run_years(&dataset);
        }
        Commands::Top { selection, limit } => {
            let (settings, sources) = resolve_sources(titles, credits)?;
            let dataset = sources.load(&settings)?;
            commands::top::run_top(&dataset, &settings, &selection, limit)?;
        }
        Commands::Browse { selection, limit } => {
            let (settings, sources) = resolve_sources(titles, credits)?;
            let dataset = sources.load(&settings)?;
            commands::browse::run_browse(&dataset, &settings, &selection, limit)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (settings, sources) = resolve_sources(titles, credits)?;
                commands::config::run_config_show(&settings, &sources)?;
            }
            // Does not read the settings file, so it still works when the
            // file is malformed.
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }

    Ok(())
}

/// Load `settings.toml` and resolve the CSV locations against the flags.
fn resolve_sources(
    titles: Option<PathBuf>,
    credits: Option<PathBuf>,
) -> Result<(Settings, DataSources), CliError> {
    let settings = Settings::load()?;
    let sources = DataSources::resolve(&settings, titles, credits);
    Ok((settings, sources))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_parses_and_runs_without_data() {
        let cli = Cli::try_parse_from([
            "movie-picker",
            "--titles",
            "/nonexistent/titles.csv",
            "config",
            "path",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Path
            }
        ));
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_top_with_missing_titles_fails() {
        let cli = Cli::try_parse_from([
            "movie-picker",
            "--titles",
            "/nonexistent/titles.csv",
            "--credits",
            "/nonexistent/credits.csv",
            "top",
        ])
        .unwrap();
        assert!(matches!(run(cli), Err(CliError::Data(_)) | Err(CliError::Settings(_))));
    }
}
