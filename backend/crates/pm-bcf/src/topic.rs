use crate::GuidResolution;

use pm_core::Issue;

/// An issue ready to be written into a package under `guid/`.
#[derive(Debug, Clone, PartialEq)]
pub struct BcfTopic {
    pub guid: String,
    /// Position in the export, written as `Index` when present
    pub index: Option<usize>,
    pub issue: Issue,
}

impl BcfTopic {
    pub fn new(guid: impl Into<String>, index: Option<usize>, issue: Issue) -> Self {
        Self {
            guid: guid.into(),
            index,
            issue,
        }
    }

    pub fn from_resolution(resolution: GuidResolution, index: usize) -> Self {
        Self::new(resolution.guid, Some(index), resolution.issue)
    }

    pub fn has_snapshot(&self) -> bool {
        self.issue
            .viewpoint
            .as_ref()
            .is_some_and(|viewpoint| viewpoint.snapshot.is_some())
    }
}
