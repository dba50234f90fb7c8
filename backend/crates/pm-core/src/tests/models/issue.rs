use crate::{CustomValue, GUID_FIELD_NAME, Issue, IssueComment};

use chrono::{TimeZone, Utc};

fn issue() -> Issue {
    Issue::new(
        7,
        1,
        "Cracked beam".to_string(),
        "Defect".to_string(),
        "Open".to_string(),
        "author@example.com".to_string(),
    )
}

#[test]
fn test_issue_new() {
    let issue = issue();

    assert_eq!(issue.id, 7);
    assert_eq!(issue.project_id, 1);
    assert_eq!(issue.title, "Cracked beam");
    assert!(issue.description.is_none());
    assert!(issue.comments.is_empty());
    assert!(issue.viewpoint.is_none());
    assert_eq!(issue.guid(), None);
}

#[test]
fn test_issue_guid_reads_guid_custom_value() {
    let mut issue = issue();
    issue.custom_values.push(CustomValue::new("Floor", "2"));
    issue
        .custom_values
        .push(CustomValue::new(GUID_FIELD_NAME, "abc-123"));

    assert_eq!(issue.guid(), Some("abc-123"));
}

#[test]
fn test_issue_with_guid_adds_value_without_touching_original() {
    let issue = issue();

    let stamped = issue.with_guid("abc-123");

    assert_eq!(stamped.guid(), Some("abc-123"));
    assert_eq!(issue.guid(), None);
}

#[test]
fn test_issue_with_guid_replaces_existing_value() {
    let issue = issue().with_guid("first");

    let stamped = issue.with_guid("second");

    assert_eq!(stamped.guid(), Some("second"));
    assert_eq!(stamped.custom_values.len(), 1);
}

#[test]
fn test_issue_exportable_comments_skips_empty_notes() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut issue = issue();
    issue.comments = vec![
        IssueComment::new(1, "first", at),
        IssueComment::new(2, "", at),
        IssueComment::new(3, "third", at),
    ];

    let ids: Vec<i64> = issue.exportable_comments().map(|c| c.id).collect();

    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_issue_deserializes_with_offset_timestamps_as_utc() {
    let json = r#"{
        "id": 1,
        "project_id": 2,
        "title": "t",
        "description": null,
        "type_name": "Task",
        "status_name": "New",
        "author_email": "a@b.c",
        "created_at": "2024-03-01T10:00:00+02:00",
        "updated_at": "2024-03-01T10:00:00-05:00"
    }"#;

    let issue: Issue = serde_json::from_str(json).unwrap();

    assert_eq!(
        issue.created_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    );
    assert_eq!(
        issue.updated_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap()
    );
    assert!(issue.comments.is_empty());
}
