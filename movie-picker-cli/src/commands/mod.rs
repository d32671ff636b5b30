pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod genres;
pub(crate) mod top;
pub(crate) mod years;

use std::path::PathBuf;

use movie_picker_lib::{Dataset, Settings};

use crate::error::CliError;

/// Resolved locations of the two CSV sources.
#[derive(Debug, Clone)]
pub(crate) struct DataSources {
    pub titles: PathBuf,
    pub credits: PathBuf,
}

impl DataSources {
    pub(crate) fn resolve(
        settings: &Settings,
        titles: Option<PathBuf>,
        credits: Option<PathBuf>,
    ) -> Self {
        Self {
            titles: settings.titles_path(titles),
            credits: settings.credits_path(credits),
        }
    }

    /// Load and join both sources. Failure here ends the program.
    pub(crate) fn load(&self, settings: &Settings) -> Result<Dataset, CliError> {
        let dataset = Dataset::load(&self.titles, &self.credits, settings.join_policy())?;
        log::debug!(
            "{} titles, {} genres, years {:?}",
            dataset.title_count(),
            dataset.distinct_genres().len(),
            dataset.year_bounds(),
        );
        Ok(dataset)
    }
}
