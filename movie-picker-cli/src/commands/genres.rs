use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_picker_lib::Dataset;

/// List every distinct genre.
pub(crate) fn run_genres(dataset: &Dataset) {
    print_genres(&dataset.distinct_genres());
}

pub(crate) fn print_genres(genres: &[String]) {
    if genres.is_empty() {
        log::info!(
            "{}",
            "No genres found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    log::info!(
        "{}",
        format!("Genres ({}):", genres.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for genre in genres {
        log::info!("  {}", genre.if_supports_color(Stdout, |t| t.cyan()));
    }
}
