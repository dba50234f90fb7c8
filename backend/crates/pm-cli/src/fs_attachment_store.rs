//! Attachment store backed by a directory tree:
//! `<root>/<project>-<page>/<id>-<file name>` plus a `<id>.json` record.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use pm_bcf::{AttachmentStore, BcfError, BcfResult, NewAttachment, StoredAttachment};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FsAttachmentStore {
    root: PathBuf,
}

impl FsAttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn container_dir(&self, project_id: i64, page_id: i64) -> PathBuf {
        self.root.join(format!("{project_id}-{page_id}"))
    }

    pub fn file_path(&self, record: &StoredAttachment) -> PathBuf {
        self.container_dir(record.container.project_id, record.container.page_id)
            .join(format!("{}-{}", record.id, record.file_name))
    }
}

impl AttachmentStore for FsAttachmentStore {
    fn store(&self, attachment: NewAttachment) -> BcfResult<StoredAttachment> {
        let dir = self.container_dir(attachment.container.project_id, attachment.container.page_id);
        fs::create_dir_all(&dir)
            .map_err(|e| BcfError::io(format!("creating {}", dir.display()), e))?;

        let record = StoredAttachment {
            id: Uuid::new_v4().simple().to_string(),
            author: attachment.author,
            container: attachment.container,
            content_type: attachment.content_type,
            file_name: attachment.file_name,
            size: attachment.bytes.len() as u64,
            created_at: Utc::now(),
        };

        let file_path = self.file_path(&record);
        fs::write(&file_path, &attachment.bytes)
            .map_err(|e| BcfError::io(format!("writing {}", file_path.display()), e))?;

        let record_path = dir.join(format!("{}.json", record.id));
        let json = serde_json::to_vec_pretty(&record)
            .map_err(|e| BcfError::storage(format!("serializing attachment record: {e}")))?;
        if let Err(e) = fs::write(&record_path, json) {
            // Don't leave an orphaned archive behind
            let _ = fs::remove_file(&file_path);
            return Err(BcfError::io(format!("writing {}", record_path.display()), e));
        }

        debug!("Stored attachment {} at {}", record.id, file_path.display());
        Ok(record)
    }
}
