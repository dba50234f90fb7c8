use crate::{
    ArchiveCompression, ConfigError, ConfigErrorResult, DEFAULT_ALLOCATE_GUIDS,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_PRODUCER_NAME, DEFAULT_WIKI_PAGE_TITLE,
    MAX_PRODUCER_NAME_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BcfConfig {
    /// Tool name recorded in the header comment of every generated document
    pub producer_name: String,
    /// Title of the wiki page that receives exported packages
    pub wiki_page_title: String,
    pub compression: ArchiveCompression,
    /// Stamp issues that have no GUID with a fresh one (otherwise fall back to the issue id)
    pub allocate_guids: bool,
    /// Attachment store directory, relative to the config directory
    pub output_dir: String,
}

impl Default for BcfConfig {
    fn default() -> Self {
        Self {
            producer_name: String::from(DEFAULT_PRODUCER_NAME),
            wiki_page_title: String::from(DEFAULT_WIKI_PAGE_TITLE),
            compression: ArchiveCompression::default(),
            allocate_guids: DEFAULT_ALLOCATE_GUIDS,
            output_dir: String::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }
}

impl BcfConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.producer_name.trim().is_empty() {
            return Err(ConfigError::bcf("bcf.producer_name cannot be empty"));
        }

        if self.producer_name.len() > MAX_PRODUCER_NAME_LENGTH {
            return Err(ConfigError::bcf(format!(
                "bcf.producer_name must be at most {} characters, got {}",
                MAX_PRODUCER_NAME_LENGTH,
                self.producer_name.len()
            )));
        }

        // Ends up inside an XML comment
        if self.producer_name.contains("--") {
            return Err(ConfigError::bcf("bcf.producer_name cannot contain '--'"));
        }

        if self.wiki_page_title.trim().is_empty() {
            return Err(ConfigError::bcf("bcf.wiki_page_title cannot be empty"));
        }

        let output_dir = Path::new(&self.output_dir);
        if self.output_dir.is_empty() || output_dir.is_absolute() || self.output_dir.contains("..")
        {
            return Err(ConfigError::bcf(
                "bcf.output_dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
