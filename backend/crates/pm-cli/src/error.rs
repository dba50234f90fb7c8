use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] pm_config::ConfigError),

    #[error("Export error: {0}")]
    Bcf(#[from] pm_bcf::BcfError),

    #[error("Dataset error in {path}: {message} {location}")]
    Dataset {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown issue id {id} {location}")]
    UnknownIssue { id: i64, location: ErrorLocation },

    #[error("Failed to serialize output: {source} {location}")]
    Output {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn dataset(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        CliError::Dataset {
            path: path.into(),
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn output(source: serde_json::Error) -> Self {
        CliError::Output {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn unknown_issue(id: i64) -> Self {
        CliError::UnknownIssue {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
