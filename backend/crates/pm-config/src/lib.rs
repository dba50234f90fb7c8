mod archive_compression;
mod bcf_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use archive_compression::ArchiveCompression;
pub use bcf_config::BcfConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_PRODUCER_NAME: &str = "Blazor Agile Board";
const DEFAULT_WIKI_PAGE_TITLE: &str = "Wiki";
const DEFAULT_OUTPUT_DIRECTORY: &str = "exports";
const DEFAULT_ALLOCATE_GUIDS: bool = true;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const MAX_PRODUCER_NAME_LENGTH: usize = 128;
