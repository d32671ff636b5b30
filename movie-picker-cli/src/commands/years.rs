use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_picker_lib::Dataset;

/// Show the observed release-year bounds.
pub(crate) fn run_years(dataset: &Dataset) {
    match dataset.year_bounds() {
        Some(bounds) => log::info!(
            "Release years: {} - {}",
            bounds.min.if_supports_color(Stdout, |t| t.cyan()),
            bounds.max.if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => log::info!(
            "{}",
            "No valid release years found.".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}
