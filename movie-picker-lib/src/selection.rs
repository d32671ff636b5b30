//! Turning user-supplied genre and year choices into a [`FilterQuery`].
//!
//! Mirrors what the selector controls allow: the genre must be one of the
//! enumerated genres, and each year bound is clamped into the dataset's
//! observed range.

use crate::dataset::Dataset;
use crate::error::SelectionError;
use crate::filter::{FilterQuery, YearBounds, YearRange};

/// Pick a genre from `available` (sorted, distinct).
///
/// `None` selects the first genre. An exact match wins; otherwise a
/// case-insensitive match is accepted only when it is unique.
pub fn resolve_genre(
    available: &[String],
    requested: Option<&str>,
) -> Result<String, SelectionError> {
    let Some(requested) = requested else {
        return available.first().cloned().ok_or(SelectionError::NoGenres);
    };

    if let Some(exact) = available.iter().find(|g| *g == requested) {
        return Ok(exact.clone());
    }

    let requested_lower = requested.trim().to_lowercase();
    let mut candidates: Vec<String> = available
        .iter()
        .filter(|g| g.to_lowercase() == requested_lower)
        .cloned()
        .collect();

    match candidates.len() {
        0 => Err(SelectionError::UnknownGenre {
            genre: requested.to_string(),
            available: available.to_vec(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(SelectionError::AmbiguousGenre {
            genre: requested.to_string(),
            candidates,
        }),
    }
}

/// Build a year range from optional bounds, falling back to `default`,
/// then clamp into `bounds` when the dataset has any valid years.
///
/// A reversed range is kept as given; it simply matches nothing.
pub fn resolve_years(
    bounds: Option<YearBounds>,
    from: Option<i32>,
    to: Option<i32>,
    default: YearRange,
) -> YearRange {
    let range = YearRange::new(from.unwrap_or(default.low), to.unwrap_or(default.high));
    match bounds {
        Some(b) => b.clamp(range),
        None => range,
    }
}

/// Resolve a complete query against a loaded dataset.
pub fn resolve_query(
    dataset: &Dataset,
    genre: Option<&str>,
    from: Option<i32>,
    to: Option<i32>,
    default: YearRange,
) -> Result<FilterQuery, SelectionError> {
    let genre = resolve_genre(&dataset.distinct_genres(), genre)?;
    let years = resolve_years(dataset.year_bounds(), from, to, default);
    Ok(FilterQuery::new(genre, years))
}

#[cfg(test)]
#[path = "tests/selection_tests.rs"]
mod tests;
