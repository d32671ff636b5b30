use thiserror::Error;

use movie_picker_lib::{DataError, SelectionError, SettingsError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error (terminal reads and writes)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Titles or credits could not be loaded
    #[error("{0}")]
    Data(#[from] DataError),

    /// Genre or year selection was rejected
    #[error("{0}")]
    Selection(#[from] SelectionError),

    /// Settings file could not be read
    #[error("Config error: {0}")]
    Settings(#[from] SettingsError),

    /// Bad input in the interactive browser
    #[error("{0}")]
    Input(String),
}

impl CliError {
    pub(crate) fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}
