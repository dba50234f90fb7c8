use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Compression applied to every entry of an exported archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveCompression {
    #[default]
    Deflated,
    Stored,
}

impl ArchiveCompression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deflated => "deflated",
            Self::Stored => "stored",
        }
    }
}

impl FromStr for ArchiveCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deflated" => Ok(Self::Deflated),
            "stored" => Ok(Self::Stored),
            other => Err(format!("unknown archive compression: {other}")),
        }
    }
}

impl fmt::Display for ArchiveCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
