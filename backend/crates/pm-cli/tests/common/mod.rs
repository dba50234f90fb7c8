#![allow(dead_code)]

use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use pm_cli::Dataset;
use pm_core::{
    CustomValue, GUID_FIELD_NAME, Issue, IssueComment, PerspectiveCamera, Project, Vector3,
    Viewpoint, WikiPage,
};
use zip::ZipArchive;

pub const AUTHOR: &str = "exporter@example.com";

pub fn create_test_issue(id: i64, project_id: i64) -> Issue {
    let mut issue = Issue::new(
        id,
        project_id,
        format!("Issue {id}"),
        "Defect".to_string(),
        "Open".to_string(),
        "author@example.com".to_string(),
    );
    issue.description = Some(format!("Description of issue {id}"));
    issue.created_at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    issue.updated_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
    issue.comments = vec![IssueComment::new(
        id * 10,
        "Please check",
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    )];
    issue
}

pub fn with_guid(mut issue: Issue, guid: &str) -> Issue {
    issue
        .custom_values
        .push(CustomValue::new(GUID_FIELD_NAME, guid));
    issue
}

pub fn with_viewpoint(mut issue: Issue) -> Issue {
    issue.viewpoint = Some(Viewpoint {
        guid: "0f9d6c2e-7d1c-4d55-9c4b-2f0c6f1e8a11".to_string(),
        camera: PerspectiveCamera {
            position: Vector3::new(1.0, 2.0, 3.0),
            direction: Vector3::new(0.0, 0.0, -1.0),
            up_vector: Vector3::new(0.0, 1.0, 0.0),
            field_of_view: 60.0,
        },
        default_visibility: true,
        exceptions: Vec::new(),
        snapshot: None,
    });
    issue
}

/// Project 1 has a "Wiki" page, project 2 does not.
pub fn create_test_projects() -> Vec<Project> {
    let mut with_wiki = Project::new(1, "Tower".to_string());
    with_wiki.wiki_pages.push(WikiPage {
        id: 100,
        title: "Wiki".to_string(),
    });
    vec![with_wiki, Project::new(2, "Bridge".to_string())]
}

pub fn write_dataset(dir: &Path, issues: Vec<Issue>) -> PathBuf {
    let path = dir.join("dataset.json");
    Dataset {
        projects: create_test_projects(),
        issues,
    }
    .save(&path)
    .unwrap();
    path
}

pub fn archive_entries(bytes: &[u8]) -> Vec<String> {
    let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| archive.name_for_index(i).unwrap().to_string())
        .collect()
}

pub fn read_entry(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    contents
}
