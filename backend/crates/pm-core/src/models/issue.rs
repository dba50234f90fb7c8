//! Issue entity - the record exported as a BCF topic.

use crate::{CustomValue, GUID_FIELD_NAME, IssueComment, Viewpoint};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub project_id: i64,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub type_name: String,
    pub status_name: String,

    pub author_email: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Journal notes in chronological order
    #[serde(default)]
    pub comments: Vec<IssueComment>,

    #[serde(default)]
    pub custom_values: Vec<CustomValue>,

    #[serde(default)]
    pub viewpoint: Option<Viewpoint>,
}

impl Issue {
    pub fn new(
        id: i64,
        project_id: i64,
        title: String,
        type_name: String,
        status_name: String,
        author_email: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            project_id,
            title,
            description: None,
            type_name,
            status_name,
            author_email,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            custom_values: Vec::new(),
            viewpoint: None,
        }
    }

    /// Value of the `GUID` custom field, if one has been assigned.
    pub fn guid(&self) -> Option<&str> {
        self.custom_values
            .iter()
            .find(|cv| cv.field_name == GUID_FIELD_NAME)
            .map(|cv| cv.value.as_str())
    }

    /// Comments that carry notes, in their original order.
    pub fn exportable_comments(&self) -> impl Iterator<Item = &IssueComment> {
        self.comments.iter().filter(|c| c.has_notes())
    }

    /// Returns a copy of this issue stamped with the given GUID.
    ///
    /// An existing `GUID` value is replaced rather than duplicated.
    pub fn with_guid(&self, guid: impl Into<String>) -> Self {
        let guid = guid.into();
        let mut issue = self.clone();
        match issue
            .custom_values
            .iter_mut()
            .find(|cv| cv.field_name == GUID_FIELD_NAME)
        {
            Some(existing) => existing.value = guid,
            None => issue
                .custom_values
                .push(CustomValue::new(GUID_FIELD_NAME, guid)),
        }
        issue
    }
}
