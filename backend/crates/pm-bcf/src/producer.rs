use crate::timestamp::format_rfc3339;

use chrono::{DateTime, Utc};
use pm_config::BcfConfig;

/// Identity of the tool generating a package, recorded in document headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer {
    pub name: String,
    pub version: String,
}

impl Producer {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn from_config(config: &BcfConfig) -> Self {
        Self::new(config.producer_name.clone(), env!("CARGO_PKG_VERSION"))
    }

    /// Body of the comment that opens every document in the package.
    pub fn header_comment(&self, generated_at: &DateTime<Utc>) -> String {
        let name = comment_safe(&self.name);
        let version = comment_safe(&self.version);
        format!(
            " Created by {name} {version} at {} ",
            format_rfc3339(generated_at)
        )
    }
}

/// "--" is not allowed inside XML comments; runs of dashes are split apart.
fn comment_safe(text: &str) -> String {
    let mut safe = text.to_string();
    while safe.contains("--") {
        safe = safe.replace("--", "- -");
    }
    safe
}
