//! JSON shapes served by the BCF REST endpoints.

use crate::timestamp::format_rfc3339;
use crate::{GuidPolicy, GuidResolution, resolve_guid};

use pm_core::{Issue, Project};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub guid: String,
    pub creation_author: String,
    pub creation_date: String,
    pub modified_date: String,
    pub title: String,
}

impl From<&GuidResolution> for TopicSummary {
    fn from(resolution: &GuidResolution) -> Self {
        let issue = &resolution.issue;
        Self {
            guid: resolution.guid.clone(),
            creation_author: issue.author_email.clone(),
            creation_date: format_rfc3339(&issue.created_at),
            modified_date: format_rfc3339(&issue.updated_at),
            title: issue.title.clone(),
        }
    }
}

/// Serialized as `{}`; per-project BCF permissions are not exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectAuthorization {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub project_id: i64,
    pub name: String,
    pub authorization: ProjectAuthorization,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            project_id: project.id,
            name: project.name.clone(),
            authorization: ProjectAuthorization::default(),
        }
    }
}

/// Topics of a project, optionally restricted to one issue type.
///
/// GUIDs are resolved like an export does; callers persist the allocated
/// ones.
pub fn project_topics(
    issues: &[Issue],
    project_id: i64,
    type_name: Option<&str>,
    policy: GuidPolicy,
) -> Vec<GuidResolution> {
    issues
        .iter()
        .filter(|issue| issue.project_id == project_id)
        .filter(|issue| type_name.is_none_or(|name| issue.type_name == name))
        .map(|issue| resolve_guid(issue, policy))
        .collect()
}
