//! Genre and release-year filtering.
//!
//! Every function here is a pure function of its inputs. Filtering is
//! re-run from the full record set on every parameter change; nothing is
//! cached between calls.

use std::collections::BTreeSet;

use crate::types::MergedRecord;

/// How many matches are shown by default.
pub const DEFAULT_LIMIT: usize = 10;

/// Initial year range before clamping to the dataset's bounds.
pub const DEFAULT_YEAR_RANGE: YearRange = YearRange {
    low: 2000,
    high: 2023,
};

/// An inclusive `(low, high)` release-year range.
///
/// A range with `low > high` is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub low: i32,
    pub high: i32,
}

impl YearRange {
    pub fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.low <= year && year <= self.high
    }
}

/// Smallest and largest valid release year in a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    /// Clamp both ends of `range` into `[min, max]` independently.
    pub fn clamp(&self, range: YearRange) -> YearRange {
        YearRange::new(
            range.low.clamp(self.min, self.max),
            range.high.clamp(self.min, self.max),
        )
    }

    pub fn full_range(&self) -> YearRange {
        YearRange::new(self.min, self.max)
    }
}

/// A genre plus an inclusive year range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub genre: String,
    pub years: YearRange,
}

impl FilterQuery {
    pub fn new(genre: impl Into<String>, years: YearRange) -> Self {
        Self {
            genre: genre.into(),
            years,
        }
    }

    /// Genre membership AND year in range. A record without a usable year
    /// never matches.
    pub fn matches(&self, record: &MergedRecord) -> bool {
        record.title.has_genre(&self.genre)
            && record
                .title
                .release_year
                .is_some_and(|year| self.years.contains(year))
    }
}

/// Select matching records, preserving their relative order.
pub fn filter<'a>(records: &'a [MergedRecord], query: &FilterQuery) -> Vec<&'a MergedRecord> {
    records.iter().filter(|r| query.matches(r)).collect()
}

/// The first `n` items of `records`.
pub fn top<T>(records: &[T], n: usize) -> &[T] {
    &records[..n.min(records.len())]
}

/// Every distinct non-empty genre across `records`, sorted.
pub fn distinct_genres(records: &[MergedRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.title.genres.iter())
        .filter(|g| !g.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Min and max of all valid release years, or `None` if there are none.
pub fn year_bounds(records: &[MergedRecord]) -> Option<YearBounds> {
    let mut years = records.iter().filter_map(|r| r.title.release_year);
    let first = years.next()?;
    let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    Some(YearBounds { min, max })
}

/// The result of one filter pass: every match plus the display limit.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub query: FilterQuery,
    pub matches: Vec<&'a MergedRecord>,
    pub limit: usize,
}

impl<'a> FilterOutcome<'a> {
    pub fn run(records: &'a [MergedRecord], query: FilterQuery, limit: usize) -> Self {
        let matches = filter(records, &query);
        Self {
            query,
            matches,
            limit,
        }
    }

    /// Total number of matching records, before truncation.
    pub fn total(&self) -> usize {
        self.matches.len()
    }

    /// The records to display.
    pub fn shown(&self) -> &[&'a MergedRecord] {
        top(&self.matches, self.limit)
    }

    /// `Top K <Genre> Movies (Y1 - Y2):`, with K the displayed count.
    pub fn heading(&self) -> String {
        format!(
            "Top {} {} Movies ({} - {}):",
            self.shown().len(),
            self.query.genre,
            self.query.years.low,
            self.query.years.high,
        )
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
