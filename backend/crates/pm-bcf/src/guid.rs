//! Resolve-or-allocate step for topic GUIDs.
//!
//! Resolution is pure: an issue without a `GUID` value gets a stamped copy
//! back together with `allocated = true`, and persisting that value is left
//! to the caller.

use pm_core::Issue;
use uuid::Uuid;

/// What to do with issues that have no `GUID` custom value yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidPolicy {
    /// Generate a random UUID and stamp it onto the issue
    Allocate,
    /// Use the numeric issue id (GUID field unavailable)
    FallbackToId,
}

impl GuidPolicy {
    pub fn from_allocate_flag(allocate: bool) -> Self {
        if allocate {
            Self::Allocate
        } else {
            Self::FallbackToId
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuidResolution {
    /// The issue, stamped with `guid` when it was allocated
    pub issue: Issue,
    pub guid: String,
    /// True when `guid` is new and must be persisted
    pub allocated: bool,
}

pub fn resolve_guid(issue: &Issue, policy: GuidPolicy) -> GuidResolution {
    if let Some(existing) = issue.guid() {
        return GuidResolution {
            guid: existing.to_string(),
            issue: issue.clone(),
            allocated: false,
        };
    }

    match policy {
        GuidPolicy::Allocate => {
            let guid = Uuid::new_v4().to_string();
            GuidResolution {
                issue: issue.with_guid(guid.clone()),
                guid,
                allocated: true,
            }
        }
        GuidPolicy::FallbackToId => GuidResolution {
            guid: issue.id.to_string(),
            issue: issue.clone(),
            allocated: false,
        },
    }
}
