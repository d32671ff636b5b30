//! CSV loading and the titles/credits left join.
//!
//! Both sources are header-described CSV files. The titles source drives
//! the join: every title appears in the output at least once, with a blank
//! credit when no credit row shares its `id`.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::DataError;
use crate::filter::{YearBounds, distinct_genres, year_bounds};
use crate::types::{CreditRecord, MergedRecord, TitleRecord, parse_year};

/// Columns the titles source must carry. `description` is optional.
const TITLE_COLUMNS: &[&str] = &["id", "title", "release_year", "genres"];

/// How to handle several credit rows sharing one title `id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Repeat the title once per matching credit row (plain left join).
    #[default]
    KeepDuplicates,
    /// Pair each title with its first matching credit row only.
    FirstMatch,
}

#[derive(Debug, Deserialize)]
struct TitleRow {
    id: String,
    title: String,
    release_year: Option<String>,
    genres: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<TitleRow> for TitleRecord {
    fn from(row: TitleRow) -> Self {
        TitleRecord::new(
            row.id,
            row.title,
            row.release_year.as_deref().and_then(parse_year),
            non_blank(row.genres),
            non_blank(row.description),
        )
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Load the titles source from a file path.
pub fn load_titles(path: &Path) -> Result<Vec<TitleRecord>, DataError> {
    let contents = read_source(path)?;
    parse_titles_csv(&contents, &path.display().to_string())
}

/// Load the credits source from a file path.
pub fn load_credits(path: &Path) -> Result<Vec<CreditRecord>, DataError> {
    let contents = read_source(path)?;
    parse_credits_csv(&contents, &path.display().to_string())
}

fn read_source(path: &Path) -> Result<String, DataError> {
    std::fs::read_to_string(path).map_err(|e| DataError::io(path.display().to_string(), e))
}

/// Parse titles CSV content. `origin` names the source in errors and logs.
pub fn parse_titles_csv(content: &str, origin: &str) -> Result<Vec<TitleRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataError::csv(origin, e))?
        .clone();
    for column in TITLE_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataError::missing_column(origin, *column));
        }
    }

    let mut titles = Vec::new();
    for result in reader.deserialize::<TitleRow>() {
        match result {
            Ok(row) => titles.push(TitleRecord::from(row)),
            Err(e) => log::warn!("Skipping malformed row in {origin}: {e}"),
        }
    }

    Ok(titles)
}

/// Parse credits CSV content. Only the `id` column is required.
pub fn parse_credits_csv(content: &str, origin: &str) -> Result<Vec<CreditRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataError::csv(origin, e))?
        .clone();
    let id_index = headers
        .iter()
        .position(|h| h == "id")
        .ok_or_else(|| DataError::missing_column(origin, "id"))?;

    let mut credits = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed row in {origin}: {e}");
                continue;
            }
        };

        let Some(id) = record.get(id_index) else {
            log::warn!("Skipping row without an id in {origin}");
            continue;
        };

        let fields = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != id_index)
            .map(|(i, name)| (name.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();

        credits.push(CreditRecord {
            id: id.to_string(),
            fields,
        });
    }

    Ok(credits)
}

/// Left-join titles with credits on `id`, keeping title order.
pub fn join(
    titles: Vec<TitleRecord>,
    credits: Vec<CreditRecord>,
    policy: JoinPolicy,
) -> Vec<MergedRecord> {
    let mut by_id: HashMap<String, Vec<CreditRecord>> = HashMap::new();
    for credit in credits {
        by_id.entry(credit.id.clone()).or_default().push(credit);
    }

    let mut merged = Vec::with_capacity(titles.len());
    for title in titles {
        match (by_id.get(&title.id), policy) {
            (None, _) => merged.push(MergedRecord {
                title,
                credit: None,
            }),
            (Some(matches), JoinPolicy::FirstMatch) => merged.push(MergedRecord {
                title,
                credit: matches.first().cloned(),
            }),
            (Some(matches), JoinPolicy::KeepDuplicates) => {
                for credit in matches {
                    merged.push(MergedRecord {
                        title: title.clone(),
                        credit: Some(credit.clone()),
                    });
                }
            }
        }
    }

    merged
}

/// The loaded, joined, read-only working set.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<MergedRecord>,
    title_count: usize,
}

impl Dataset {
    /// Load both sources and join them. Any I/O or header problem is fatal.
    pub fn load(
        titles_path: &Path,
        credits_path: &Path,
        policy: JoinPolicy,
    ) -> Result<Self, DataError> {
        let titles = load_titles(titles_path)?;
        let credits = load_credits(credits_path)?;
        log::debug!(
            "Loaded {} titles from {} and {} credit rows from {}",
            titles.len(),
            titles_path.display(),
            credits.len(),
            credits_path.display(),
        );

        let dataset = Self::from_parts(titles, credits, policy);
        log::debug!(
            "Joined into {} records ({} titles without credits)",
            dataset.len(),
            dataset.unmatched_count(),
        );
        Ok(dataset)
    }

    pub fn from_parts(
        titles: Vec<TitleRecord>,
        credits: Vec<CreditRecord>,
        policy: JoinPolicy,
    ) -> Self {
        let title_count = titles.len();
        Self {
            records: join(titles, credits, policy),
            title_count,
        }
    }

    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows in the titles source.
    pub fn title_count(&self) -> usize {
        self.title_count
    }

    /// Number of merged records with no credit row.
    pub fn unmatched_count(&self) -> usize {
        self.records.iter().filter(|r| !r.has_credit()).count()
    }

    pub fn distinct_genres(&self) -> Vec<String> {
        distinct_genres(&self.records)
    }

    pub fn year_bounds(&self) -> Option<YearBounds> {
        year_bounds(&self.records)
    }
}

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
