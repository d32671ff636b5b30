use thiserror::Error;

/// Errors that can occur while loading the titles and credits sources.
///
/// All of these are fatal: nothing can be displayed without data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },
}

impl DataError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn missing_column(path: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }
}

/// Errors from turning user input into a filter query.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Unknown genre '{genre}' (available: {})", .available.join(", "))]
    UnknownGenre {
        genre: String,
        available: Vec<String>,
    },

    #[error("Genre '{genre}' is ambiguous (could be: {})", .candidates.join(", "))]
    AmbiguousGenre {
        genre: String,
        candidates: Vec<String>,
    },

    #[error("The dataset has no genres to choose from")]
    NoGenres,
}

/// Errors reading or writing `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
