//! Interactive browser: change the genre or year range and see the top
//! matches again. Every change re-runs the filter over the whole dataset.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movie_picker_lib::{
    Dataset, FilterOutcome, FilterQuery, SelectionError, Settings, YearBounds, YearRange,
    resolve_genre, resolve_query, resolve_years,
};

use super::genres::print_genres;
use crate::cli_types::SelectionArgs;
use crate::error::CliError;
use crate::render;

/// One line of input at the `browse>` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Genre(String),
    From(i32),
    To(i32),
    Years(i32, i32),
    Reset,
    ListGenres,
    Show,
    Help,
    Quit,
}

impl BrowseCommand {
    pub(crate) fn parse(line: &str) -> Result<Self, CliError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" | "show" => Ok(Self::Show),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            "?" | "help" => Ok(Self::Help),
            "genres" => Ok(Self::ListGenres),
            "reset" => Ok(Self::Reset),
            "genre" | "g" => {
                if rest.is_empty() {
                    Err(CliError::input("usage: genre <name>"))
                } else {
                    Ok(Self::Genre(rest.to_string()))
                }
            }
            "from" => parse_year(rest).map(Self::From),
            "to" => parse_year(rest).map(Self::To),
            "years" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(low), Some(high), None) => {
                        Ok(Self::Years(parse_year(low)?, parse_year(high)?))
                    }
                    _ => Err(CliError::input("usage: years <from> <to>")),
                }
            }
            other => Err(CliError::input(format!(
                "Unknown command '{other}' (type 'help' for commands)"
            ))),
        }
    }
}

fn parse_year(s: &str) -> Result<i32, CliError> {
    s.parse()
        .map_err(|_| CliError::input(format!("'{s}' is not a year")))
}

/// The browser's current selection, plus what it is validated against.
#[derive(Debug, Clone)]
pub(crate) struct BrowseState {
    genres: Vec<String>,
    bounds: Option<YearBounds>,
    default_range: YearRange,
    pub query: FilterQuery,
}

impl BrowseState {
    pub(crate) fn new(
        dataset: &Dataset,
        settings: &Settings,
        selection: &SelectionArgs,
    ) -> Result<Self, SelectionError> {
        let query = resolve_query(
            dataset,
            selection.genre.as_deref(),
            selection.from,
            selection.to,
            settings.default_range(),
        )?;
        Ok(Self {
            genres: dataset.distinct_genres(),
            bounds: dataset.year_bounds(),
            default_range: settings.default_range(),
            query,
        })
    }

    pub(crate) fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Apply a selection change. Returns `false` for commands that do not
    /// touch the selection.
    pub(crate) fn apply(&mut self, command: &BrowseCommand) -> Result<bool, SelectionError> {
        let current = self.query.years;
        match command {
            BrowseCommand::Genre(name) => {
                self.query.genre = resolve_genre(&self.genres, Some(name.as_str()))?;
            }
            BrowseCommand::From(low) => {
                self.query.years = resolve_years(
                    self.bounds,
                    Some(*low),
                    Some(current.high),
                    self.default_range,
                );
            }
            BrowseCommand::To(high) => {
                self.query.years = resolve_years(
                    self.bounds,
                    Some(current.low),
                    Some(*high),
                    self.default_range,
                );
            }
            BrowseCommand::Years(low, high) => {
                self.query.years =
                    resolve_years(self.bounds, Some(*low), Some(*high), self.default_range);
            }
            BrowseCommand::Reset => {
                self.query.genre = resolve_genre(&self.genres, None)?;
                self.query.years = resolve_years(self.bounds, None, None, self.default_range);
            }
            BrowseCommand::ListGenres
            | BrowseCommand::Show
            | BrowseCommand::Help
            | BrowseCommand::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn print_help() {
    log::info!("{}", "Commands:".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  genre <name>       choose a genre");
    log::info!("  from <year>        set the first year");
    log::info!("  to <year>          set the last year");
    log::info!("  years <from> <to>  set both years");
    log::info!("  genres             list genres");
    log::info!("  reset              back to the default selection");
    log::info!("  show               redisplay the current results");
    log::info!("  q                  quit");
    log::info!("");
}

fn show(dataset: &Dataset, state: &BrowseState, limit: usize) {
    let outcome = FilterOutcome::run(dataset.records(), state.query.clone(), limit);
    render::print_outcome(&outcome);
    log::info!("");
}

/// Run the interactive loop until `q` or end of input.
pub(crate) fn run_browse(
    dataset: &Dataset,
    settings: &Settings,
    selection: &SelectionArgs,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let limit = limit.unwrap_or(settings.display.limit);
    let mut state = BrowseState::new(dataset, settings, selection)?;

    render::print_banner();
    print_help();
    show(dataset, &state, limit);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("{} ", "browse>".if_supports_color(Stdout, |t| t.cyan()));
        std::io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match BrowseCommand::parse(&line) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => print_help(),
            BrowseCommand::ListGenres => print_genres(state.genres()),
            BrowseCommand::Show => show(dataset, &state, limit),
            ref change => match state.apply(change) {
                Ok(_) => show(dataset, &state, limit),
                Err(e) => log::warn!("{e}"),
            },
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/browse_tests.rs"]
mod tests;
