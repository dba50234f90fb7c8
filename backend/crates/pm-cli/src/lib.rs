//! pm-cli library
//!
//! Dataset handling, the filesystem attachment store and the command
//! implementations behind the `pm-bcf` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub mod dataset;
pub mod dataset_guid_store;
pub mod error;
pub mod fs_attachment_store;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use dataset::Dataset;
pub use dataset_guid_store::DatasetGuidStore;
pub use error::{CliError, Result as CliResult};
pub use fs_attachment_store::FsAttachmentStore;
pub use runner::{
    ExportReport, ExportRequest, render_json, run_export, run_projects, run_topics,
};
