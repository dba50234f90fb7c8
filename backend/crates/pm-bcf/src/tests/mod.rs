
use crate::{BcfTopic, Producer};

use chrono::{DateTime, TimeZone, Utc};
use pm_core::{Issue, IssueComment, PerspectiveCamera, Vector3, Viewpoint, VisibilityException};

pub(crate) const HEADER: &str = " Created by Test Suite 1.0 at 2024-05-01T12:00:00Z ";

pub(crate) fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 30, 15).unwrap()
}

pub(crate) fn producer() -> Producer {
    Producer::new("Test Suite", "1.0")
}

pub(crate) fn issue(id: i64) -> Issue {
    let mut issue = Issue::new(
        id,
        1,
        format!("Issue {id}"),
        "Defect".to_string(),
        "Open".to_string(),
        "author@example.com".to_string(),
    );
    issue.description = Some("Something is wrong".to_string());
    issue.created_at = at(8);
    issue.updated_at = at(9);
    issue
}

pub(crate) fn comment(id: i64, notes: &str) -> IssueComment {
    IssueComment::new(id, notes, at(10))
}

pub(crate) fn viewpoint() -> Viewpoint {
    Viewpoint {
        guid: "vp-0001".to_string(),
        camera: PerspectiveCamera {
            position: Vector3::new(12.5, -3.25, 8.0),
            direction: Vector3::new(-0.5, 0.5, -0.7),
            up_vector: Vector3::new(0.0, 0.0, 1.0),
            field_of_view: 60.0,
        },
        default_visibility: true,
        exceptions: vec![VisibilityException {
            ifc_guid: "2MF28NhmDBiRVyFakgdbCT".to_string(),
            originating_system: Some("Revit".to_string()),
            authoring_tool_id: Some("563421".to_string()),
        }],
        snapshot: None,
    }
}

pub(crate) fn topic(issue: Issue) -> BcfTopic {
    BcfTopic::new(format!("guid-{}", issue.id), Some(0), issue)
}

/// Number of elements named `tag` (start or empty) in `xml`.
pub(crate) fn count_elements(xml: &str, tag: &str) -> usize {
    element_texts_or_count(xml, tag).0
}

/// Text content of every `<tag>text</tag>` in `xml`, in document order.
pub(crate) fn element_texts(xml: &str, tag: &str) -> Vec<String> {
    element_texts_or_count(xml, tag).1
}

fn element_texts_or_count(xml: &str, tag: &str) -> (usize, Vec<String>) {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut count = 0;
    let mut texts = Vec::new();
    let mut inside = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                inside = e.name().as_ref() == tag.as_bytes();
                if inside {
                    count += 1;
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == tag.as_bytes() {
                    count += 1;
                }
                inside = false;
            }
            Ok(Event::Text(e)) if inside => {
                texts.push(e.unescape().unwrap().into_owned());
                inside = false;
            }
            Ok(Event::End(_)) => inside = false,
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid XML: {e}"),
            _ => {}
        }
    }

    (count, texts)
}
