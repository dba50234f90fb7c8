//! Attachment-storage seam: where finished packages end up.

use crate::BcfResult;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const PACKAGE_CONTENT_TYPE: &str = "application/octet-stream";

/// The wiki page an export is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentContainer {
    pub project_id: i64,
    pub page_id: i64,
    pub title: String,
}

#[derive(Clone, PartialEq, Eq)]
pub struct NewAttachment {
    /// Email of the user running the export
    pub author: String,
    pub container: AttachmentContainer,
    pub content_type: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for NewAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAttachment")
            .field("author", &self.author)
            .field("container", &self.container)
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Record returned by a store once an attachment is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredAttachment {
    pub id: String,
    pub author: String,
    pub container: AttachmentContainer,
    pub content_type: String,
    pub file_name: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

pub trait AttachmentStore {
    fn store(&self, attachment: NewAttachment) -> BcfResult<StoredAttachment>;
}
