use crate::{Project, WikiPage};

#[test]
fn test_project_new() {
    let project = Project::new(3, "Tower".to_string());

    assert_eq!(project.id, 3);
    assert_eq!(project.name, "Tower");
    assert!(project.wiki_pages.is_empty());
}

#[test]
fn test_project_wiki_page_matches_exact_title() {
    let mut project = Project::new(3, "Tower".to_string());
    project.wiki_pages = vec![
        WikiPage {
            id: 10,
            title: "Wiki Archive".to_string(),
        },
        WikiPage {
            id: 11,
            title: "Wiki".to_string(),
        },
    ];

    assert_eq!(project.wiki_page("Wiki").map(|p| p.id), Some(11));
    assert!(project.wiki_page("wiki").is_none());
}
