use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the restaurant dataset.
///
/// Loading is all-or-nothing: when any of these is returned, no part of the
/// table is exposed.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Could not read dataset source '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Malformed record {record} in dataset: {message}")]
    Csv { record: u64, message: String },

    #[error("Dataset has no header row")]
    MissingHeader,

    #[error("Dataset snapshot error: {0}")]
    Snapshot(String),

    #[error("Snapshot '{snapshot}' does not match the current contents of '{csv}'")]
    StaleSnapshot { snapshot: PathBuf, csv: PathBuf },
}

/// Reported by [`Selection::validate`](crate::selection::Selection::validate) when a
/// selection references a value the dataset does not contain.
///
/// The filter engine never raises this; out-of-domain values simply match no rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Award '{0}' does not appear in the dataset")]
    UnknownAward(String),

    #[error("Currency '{0}' does not appear in the dataset")]
    UnknownCurrency(String),

    #[error("Cuisine '{0}' does not match any restaurant in the dataset")]
    UnknownCuisine(String),
}

/// Errors that can occur while reading an explorer configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] DataLoadError),
}
