use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A journal note on an issue. Only comments with notes are exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: i64,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl IssueComment {
    pub fn new(id: i64, notes: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            notes: notes.into(),
            created_at,
        }
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}
