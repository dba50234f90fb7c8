//! `viewpoint.bcfv`: camera and component visibility of a topic's viewpoint.

use crate::BcfResult;
use crate::xml_document::{XSD_NAMESPACE, XSI_NAMESPACE, XmlDocument};

use pm_core::{PerspectiveCamera, Vector3, Viewpoint, VisibilityException};

pub const VIEWPOINT_FILE_NAME: &str = "viewpoint.bcfv";
pub const SNAPSHOT_FILE_NAME: &str = "snapshot.png";

pub fn render_viewpoint(viewpoint: &Viewpoint, header_comment: &str) -> BcfResult<String> {
    let mut doc = XmlDocument::new(VIEWPOINT_FILE_NAME, header_comment)?;
    doc.start(
        "VisualizationInfo",
        &[XSI_NAMESPACE, XSD_NAMESPACE, ("Guid", viewpoint.guid.as_str())],
    )?;

    doc.start("Components", &[])?;
    let default_visibility = if viewpoint.default_visibility {
        "true"
    } else {
        "false"
    };
    doc.start("Visibility", &[("DefaultVisibility", default_visibility)])?;
    if !viewpoint.exceptions.is_empty() {
        doc.start("Exceptions", &[])?;
        for exception in &viewpoint.exceptions {
            write_exception(&mut doc, exception)?;
        }
        doc.end("Exceptions")?;
    }
    doc.end("Visibility")?;
    doc.end("Components")?;

    write_camera(&mut doc, &viewpoint.camera)?;

    doc.end("VisualizationInfo")?;
    doc.finish()
}

fn write_exception(doc: &mut XmlDocument, exception: &VisibilityException) -> BcfResult<()> {
    doc.start("Component", &[("IfcGuid", exception.ifc_guid.as_str())])?;
    if let Some(system) = &exception.originating_system {
        doc.text_element("OriginatingSystem", system)?;
    }
    if let Some(tool_id) = &exception.authoring_tool_id {
        doc.text_element("AuthoringToolId", tool_id)?;
    }
    doc.end("Component")
}

fn write_camera(doc: &mut XmlDocument, camera: &PerspectiveCamera) -> BcfResult<()> {
    doc.start("PerspectiveCamera", &[])?;
    write_vector(doc, "CameraViewPoint", &camera.position)?;
    write_vector(doc, "CameraDirection", &camera.direction)?;
    write_vector(doc, "CameraUpVector", &camera.up_vector)?;
    doc.text_element("FieldOfView", &camera.field_of_view.to_string())?;
    doc.end("PerspectiveCamera")
}

fn write_vector(doc: &mut XmlDocument, tag: &str, vector: &Vector3) -> BcfResult<()> {
    doc.start(tag, &[])?;
    doc.text_element("X", &vector.x.to_string())?;
    doc.text_element("Y", &vector.y.to_string())?;
    doc.text_element("Z", &vector.z.to_string())?;
    doc.end(tag)
}
