//! Movie title filtering over static CSV data.
//!
//! Loads a titles source and a credits source, left-joins them on `id`,
//! and selects titles by genre membership and an inclusive release-year
//! range. Everything here is pure data handling; rendering lives in
//! `movie-picker-cli`.

pub mod dataset;
pub mod error;
pub mod filter;
pub mod genre;
pub mod selection;
pub mod settings;
pub mod types;

pub use dataset::{Dataset, JoinPolicy, join, load_credits, load_titles};
pub use error::{DataError, SelectionError, SettingsError};
pub use filter::{
    DEFAULT_LIMIT, DEFAULT_YEAR_RANGE, FilterOutcome, FilterQuery, YearBounds, YearRange,
    distinct_genres, filter, top, year_bounds,
};
pub use genre::{GenreList, parse_genres};
pub use selection::{resolve_genre, resolve_query, resolve_years};
pub use settings::Settings;
pub use types::{CreditRecord, MergedRecord, TitleRecord};
