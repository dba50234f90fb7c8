use crate::BcfResult;
use crate::xml_document::{XSD_NAMESPACE, XSI_NAMESPACE, XmlDocument};

pub const MANIFEST_FILE_NAME: &str = "bcf.version";
pub const BCF_VERSION: &str = "2.1";

/// Render `bcf.version`.
pub fn render_manifest(header_comment: &str) -> BcfResult<String> {
    let mut doc = XmlDocument::new(MANIFEST_FILE_NAME, header_comment)?;
    doc.start(
        "Version",
        &[XSI_NAMESPACE, XSD_NAMESPACE, ("VersionId", BCF_VERSION)],
    )?;
    doc.text_element("DetailedVersion", BCF_VERSION)?;
    doc.end("Version")?;
    doc.finish()
}
