//! Record types for the titles and credits sources.

use crate::genre::{GenreList, parse_genres};

/// One row of the titles source.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    pub id: String,
    pub title: String,
    /// `None` when the cell was blank or not an integral number.
    pub release_year: Option<i32>,
    /// The genre cell exactly as stored.
    pub genres_raw: Option<String>,
    /// `genres_raw` parsed once at load time.
    pub genres: GenreList,
    pub description: Option<String>,
}

impl TitleRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        release_year: Option<i32>,
        genres_raw: Option<String>,
        description: Option<String>,
    ) -> Self {
        let genres = parse_genres(genres_raw.as_deref());
        Self {
            id: id.into(),
            title: title.into(),
            release_year,
            genres_raw,
            genres,
            description,
        }
    }

    /// Whether `genre` is one of this title's parsed genres.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// One row of the credits source. Only `id` is interpreted; the other
/// columns are carried along in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditRecord {
    pub id: String,
    pub fields: Vec<(String, String)>,
}

impl CreditRecord {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// A title paired with at most one credit row.
///
/// `credit` is `None` when no credit row shares the title's `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub title: TitleRecord,
    pub credit: Option<CreditRecord>,
}

impl MergedRecord {
    pub fn has_credit(&self) -> bool {
        self.credit.is_some()
    }

    /// Look up a credit-derived column. Blank for unmatched titles.
    pub fn credit_field(&self, column: &str) -> Option<&str> {
        self.credit.as_ref().and_then(|c| c.get(column))
    }
}

/// Parse a release-year cell.
///
/// Accepts integers and integral floats such as `"2001.0"` (what tabular
/// exports write for a year column that has blanks in it).
pub fn parse_year(raw: &str) -> Option<i32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(year) = s.parse::<i32>() {
        return Some(year);
    }
    let value: f64 = s.parse().ok()?;
    if value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
    {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_integer() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year(" 2023 "), Some(2023));
    }

    #[test]
    fn test_parse_year_integral_float() {
        assert_eq!(parse_year("2001.0"), Some(2001));
    }

    #[test]
    fn test_parse_year_rejects_garbage() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year("2001.5"), None);
        assert_eq!(parse_year("nan"), None);
        assert_eq!(parse_year("1e300"), None);
    }

    #[test]
    fn test_title_record_caches_genres() {
        let t = TitleRecord::new(
            "tm1",
            "Casablanca",
            Some(1942),
            Some("['drama', ' romance ']".to_string()),
            None,
        );
        assert_eq!(t.genres, vec!["drama", "romance"]);
        assert!(t.has_genre("romance"));
        assert!(!t.has_genre("Drama"));
    }

    #[test]
    fn test_credit_field_lookup() {
        let credit = CreditRecord {
            id: "tm1".to_string(),
            fields: vec![
                ("name".to_string(), "Humphrey Bogart".to_string()),
                ("role".to_string(), "ACTOR".to_string()),
            ],
        };
        let merged = MergedRecord {
            title: TitleRecord::new("tm1", "Casablanca", Some(1942), None, None),
            credit: Some(credit),
        };
        assert_eq!(merged.credit_field("role"), Some("ACTOR"));
        assert_eq!(merged.credit_field("character"), None);
        assert!(merged.has_credit());
    }
}
