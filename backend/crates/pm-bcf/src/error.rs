use std::io;
use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use pm_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BcfError {
    #[error("Nothing to export: no issues given {location}")]
    EmptyInput { location: ErrorLocation },

    #[error("No wiki page titled \"{page_title}\" in project {project_id} {location}")]
    MissingContainer {
        project_id: i64,
        page_title: String,
        location: ErrorLocation,
    },

    #[error("IO error while {context}: {source} {location}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid topic GUID \"{guid}\" {location}")]
    InvalidGuid {
        guid: String,
        location: ErrorLocation,
    },

    #[error("Duplicate topic GUID \"{guid}\" {location}")]
    DuplicateTopic {
        guid: String,
        location: ErrorLocation,
    },

    #[error("Invalid archive name \"{name}\" {location}")]
    InvalidFileName {
        name: String,
        location: ErrorLocation,
    },

    #[error("Invalid viewpoint on topic {guid}: {source}")]
    Viewpoint {
        guid: String,
        #[source]
        source: CoreError,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },
}

impl BcfError {
    #[track_caller]
    pub fn empty_input() -> Self {
        Self::EmptyInput {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_container(project_id: i64, page_title: impl Into<String>) -> Self {
        Self::MissingContainer {
            project_id,
            page_title: page_title.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// XML serialization and archive assembly failures are reported as IO errors
    #[track_caller]
    pub fn io_other<E: std::fmt::Display>(context: impl Into<String>, error: E) -> Self {
        Self::io(context, io::Error::other(error.to_string()))
    }

    #[track_caller]
    pub fn invalid_guid(guid: impl Into<String>) -> Self {
        Self::InvalidGuid {
            guid: guid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_topic(guid: impl Into<String>) -> Self {
        Self::DuplicateTopic {
            guid: guid.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_file_name(name: impl Into<String>) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type BcfResult<T> = StdResult<T, BcfError>;
