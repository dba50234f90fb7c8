
use chrono::{TimeZone, Utc};
use pm_core::{CustomValue, GUID_FIELD_NAME, Issue, Project, WikiPage};

pub(crate) fn issue(id: i64) -> Issue {
    let mut issue = Issue::new(
        id,
        1,
        format!("Issue {id}"),
        "Defect".to_string(),
        "Open".to_string(),
        "author@example.com".to_string(),
    );
    issue.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    issue.updated_at = issue.created_at;
    issue
}

pub(crate) fn issue_with_guid(id: i64, guid: &str) -> Issue {
    let mut issue = issue(id);
    issue
        .custom_values
        .push(CustomValue::new(GUID_FIELD_NAME, guid));
    issue
}

pub(crate) fn project() -> Project {
    let mut project = Project::new(1, "Tower".to_string());
    project.wiki_pages.push(WikiPage {
        id: 100,
        title: "Wiki".to_string(),
    });
    project
}
