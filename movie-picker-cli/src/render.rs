//! Terminal rendering of filter results.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_picker_lib::{FilterOutcome, MergedRecord};

pub(crate) const APP_TITLE: &str = "\u{1F3AC} Movie Recommendation System";
pub(crate) const APP_TAGLINE: &str = "Find top movies by genre and year!";
pub(crate) const SEPARATOR: &str = "---";

pub(crate) fn print_banner() {
    log::info!(
        "{}",
        APP_TITLE.if_supports_color(Stdout, |t| t.bright_cyan().bold().to_string()),
    );
    log::info!("{APP_TAGLINE}");
    log::info!("");
}

/// `🎥 Title (1999)`; the year is `?` when the record has none.
pub(crate) fn record_line(record: &MergedRecord) -> String {
    let year = record
        .title
        .release_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "?".to_string());
    format!("\u{1F3A5} {} ({})", record.title.title, year)
}

/// `> description`, or `None` when the title has no description.
pub(crate) fn description_line(record: &MergedRecord) -> Option<String> {
    record
        .title
        .description
        .as_deref()
        .map(|d| format!("> {}", d.trim()))
}

pub(crate) fn footer(outcome: &FilterOutcome<'_>) -> String {
    format!(
        "Showing {} of {} matches",
        outcome.shown().len(),
        outcome.total()
    )
}

pub(crate) fn print_outcome(outcome: &FilterOutcome<'_>) {
    log::info!(
        "{}",
        outcome
            .heading()
            .if_supports_color(Stdout, |t| t.bold().to_string()),
    );
    log::info!("");

    if outcome.total() == 0 {
        log::info!(
            "  {}",
            "No titles match this genre and year range.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("");
        return;
    }

    for record in outcome.shown() {
        log::info!(
            "{}",
            record_line(record).if_supports_color(Stdout, |t| t.bright_green().to_string()),
        );
        if let Some(description) = description_line(record) {
            log::info!("{description}");
        }
        log::info!("{SEPARATOR}");
    }

    log::info!(
        "{}",
        footer(outcome).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
