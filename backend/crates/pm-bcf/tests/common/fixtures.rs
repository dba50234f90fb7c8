use chrono::{DateTime, TimeZone, Utc};
use pm_bcf::{BcfTopic, PackageBuilder, Producer};
use pm_core::{
    CustomValue, GUID_FIELD_NAME, Issue, IssueComment, PerspectiveCamera, Project, Vector3,
    Viewpoint, WikiPage,
};

pub const AUTHOR: &str = "exporter@example.com";

pub fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

pub fn create_test_builder(temp_root: &std::path::Path) -> PackageBuilder {
    PackageBuilder::new(Producer::new("Test Suite", "1.0")).with_temp_root(temp_root)
}

/// Project 1 with a "Wiki" page (id 100)
pub fn create_test_project() -> Project {
    let mut project = Project::new(1, "Tower".to_string());
    project.wiki_pages = vec![
        WikiPage {
            id: 99,
            title: "Meeting Notes".to_string(),
        },
        WikiPage {
            id: 100,
            title: "Wiki".to_string(),
        },
    ];
    project
}

pub fn create_test_issue(id: i64) -> Issue {
    let mut issue = Issue::new(
        id,
        1,
        format!("Issue {id}"),
        "Defect".to_string(),
        "Open".to_string(),
        "author@example.com".to_string(),
    );
    issue.description = Some(format!("Description of issue {id}"));
    issue.created_at = at(8);
    issue.updated_at = at(9);
    issue
}

pub fn create_test_issue_with_guid(id: i64, guid: &str) -> Issue {
    let mut issue = create_test_issue(id);
    issue
        .custom_values
        .push(CustomValue::new(GUID_FIELD_NAME, guid));
    issue
}

pub fn create_test_comment(id: i64, notes: &str) -> IssueComment {
    IssueComment::new(id, notes, at(10))
}

pub fn create_test_viewpoint(snapshot: Option<std::path::PathBuf>) -> Viewpoint {
    Viewpoint {
        guid: "vp-1".to_string(),
        camera: PerspectiveCamera {
            position: Vector3::new(1.0, 2.0, 3.0),
            direction: Vector3::new(0.0, 1.0, 0.0),
            up_vector: Vector3::new(0.0, 0.0, 1.0),
            field_of_view: 45.0,
        },
        default_visibility: true,
        exceptions: Vec::new(),
        snapshot,
    }
}

pub fn create_test_topic(issue: Issue, index: usize) -> BcfTopic {
    let guid = issue
        .guid()
        .map(str::to_string)
        .unwrap_or_else(|| format!("guid-{}", issue.id));
    BcfTopic::new(guid, Some(index), issue)
}
