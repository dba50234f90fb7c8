//! `markup.bcf`: one topic followed by its comments and viewpoint references.

use crate::timestamp::format_date_time;
use crate::xml_document::{XSD_NAMESPACE, XSI_NAMESPACE, XmlDocument};
use crate::{BcfResult, BcfTopic, SNAPSHOT_FILE_NAME, VIEWPOINT_FILE_NAME};

use pm_core::{Issue, IssueComment};

pub const MARKUP_FILE_NAME: &str = "markup.bcf";

pub fn render_markup(topic: &BcfTopic, header_comment: &str) -> BcfResult<String> {
    let issue = &topic.issue;
    let viewpoint_guid = issue.viewpoint.as_ref().map(|v| v.guid.as_str());

    let mut doc = XmlDocument::new(MARKUP_FILE_NAME, header_comment)?;
    doc.start("Markup", &[XSI_NAMESPACE, XSD_NAMESPACE])?;

    write_topic(&mut doc, topic)?;

    for comment in issue.exportable_comments() {
        write_comment(&mut doc, comment, issue, viewpoint_guid)?;
    }

    if let Some(guid) = viewpoint_guid {
        doc.start("Viewpoints", &[("Guid", guid)])?;
        doc.text_element("Viewpoint", VIEWPOINT_FILE_NAME)?;
        if topic.has_snapshot() {
            doc.text_element("Snapshot", SNAPSHOT_FILE_NAME)?;
        }
        doc.end("Viewpoints")?;
    }

    doc.end("Markup")?;
    doc.finish()
}

fn write_topic(doc: &mut XmlDocument, topic: &BcfTopic) -> BcfResult<()> {
    let issue = &topic.issue;

    doc.start(
        "Topic",
        &[
            ("Guid", topic.guid.as_str()),
            ("TopicType", issue.type_name.as_str()),
            ("TopicStatus", issue.status_name.as_str()),
        ],
    )?;
    doc.text_element("Title", &issue.title)?;
    if let Some(index) = topic.index {
        doc.text_element("Index", &index.to_string())?;
    }
    doc.text_element("CreationDate", &format_date_time(&issue.created_at))?;
    doc.text_element("ModifiedDate", &format_date_time(&issue.updated_at))?;
    doc.text_element("CreationAuthor", &issue.author_email)?;
    doc.text_element("Description", issue.description.as_deref().unwrap_or_default())?;
    doc.end("Topic")
}

fn write_comment(
    doc: &mut XmlDocument,
    comment: &IssueComment,
    issue: &Issue,
    viewpoint_guid: Option<&str>,
) -> BcfResult<()> {
    let guid = comment.id.to_string();

    doc.start("Comment", &[("Guid", guid.as_str())])?;
    doc.text_element("Date", &format_date_time(&comment.created_at))?;
    // Comments carry the issue author
    doc.text_element("Author", &issue.author_email)?;
    doc.text_element("Comment", &comment.notes)?;
    if let Some(viewpoint_guid) = viewpoint_guid {
        doc.empty("Viewpoint", &[("Guid", viewpoint_guid)])?;
    }
    doc.end("Comment")
}
