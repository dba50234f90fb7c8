//! BCF (BIM Collaboration Format) package export.
//!
//! Issues are turned into a `.bcfzip` archive holding a `bcf.version`
//! manifest and one directory per topic, then attached to the project wiki
//! through the [`AttachmentStore`] seam.

mod archive_name;
mod attachment;
mod container_resolver;
mod error;
mod exporter;
mod guid;
mod guid_store;
mod manifest;
mod markup;
mod package;
mod package_builder;
mod producer;
mod representers;
mod timestamp;
mod topic;
mod visualization;
mod xml_document;

#[cfg(test)]
mod tests;

pub use archive_name::{ARCHIVE_EXTENSION, archive_file_name};
pub use attachment::{
    AttachmentContainer, AttachmentStore, NewAttachment, PACKAGE_CONTENT_TYPE, StoredAttachment,
};
pub use container_resolver::{ContainerResolver, ProjectCatalog};
pub use error::{BcfError, BcfResult};
pub use exporter::{BcfExporter, ExportOutcome};
pub use guid::{GuidPolicy, GuidResolution, resolve_guid};
pub use guid_store::GuidStore;
pub use manifest::{BCF_VERSION, MANIFEST_FILE_NAME, render_manifest};
pub use markup::{MARKUP_FILE_NAME, render_markup};
pub use package::BcfPackage;
pub use package_builder::PackageBuilder;
pub use producer::Producer;
pub use representers::{ProjectAuthorization, ProjectSummary, TopicSummary, project_topics};
pub use timestamp::{BCF_DATE_TIME_FORMAT, format_date_time};
pub use topic::BcfTopic;
pub use visualization::{SNAPSHOT_FILE_NAME, VIEWPOINT_FILE_NAME, render_viewpoint};
