use std::cell::RefCell;

use chrono::Utc;
use pm_bcf::{
    AttachmentStore, BcfError, BcfResult, GuidStore, NewAttachment, StoredAttachment,
};

#[derive(Default)]
pub struct MemoryAttachmentStore {
    pub stored: RefCell<Vec<NewAttachment>>,
    pub fail: bool,
}

impl MemoryAttachmentStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.stored.borrow().len()
    }
}

impl AttachmentStore for MemoryAttachmentStore {
    fn store(&self, attachment: NewAttachment) -> BcfResult<StoredAttachment> {
        if self.fail {
            return Err(BcfError::storage("attachment store unavailable"));
        }

        let mut stored = self.stored.borrow_mut();
        let record = StoredAttachment {
            id: format!("att-{}", stored.len() + 1),
            author: attachment.author.clone(),
            container: attachment.container.clone(),
            content_type: attachment.content_type.clone(),
            file_name: attachment.file_name.clone(),
            size: attachment.bytes.len() as u64,
            created_at: Utc::now(),
        };
        stored.push(attachment);
        Ok(record)
    }
}

#[derive(Default)]
pub struct MemoryGuidStore {
    pub persisted: RefCell<Vec<(i64, String)>>,
}

impl GuidStore for MemoryGuidStore {
    fn persist(&self, issue_id: i64, guid: &str) -> BcfResult<()> {
        self.persisted.borrow_mut().push((issue_id, guid.to_string()));
        Ok(())
    }
}
