use movie_picker_lib::{Dataset, FilterOutcome, Settings, resolve_query};

use crate::cli_types::SelectionArgs;
use crate::error::CliError;
use crate::render;

/// Print the banner and the top matches for one selection.
pub(crate) fn run_top(
    dataset: &Dataset,
    settings: &Settings,
    selection: &SelectionArgs,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let query = resolve_query(
        dataset,
        selection.genre.as_deref(),
        selection.from,
        selection.to,
        settings.default_range(),
    )?;
    log::debug!("Filtering with {query:?}");

    let outcome = FilterOutcome::run(
        dataset.records(),
        query,
        limit.unwrap_or(settings.display.limit),
    );

    render::print_banner();
    render::print_outcome(&outcome);
    Ok(())
}
