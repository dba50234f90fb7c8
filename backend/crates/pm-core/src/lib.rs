pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::custom_value::CustomValue;
pub use models::issue::Issue;
pub use models::issue_comment::IssueComment;
pub use models::perspective_camera::PerspectiveCamera;
pub use models::project::Project;
pub use models::vector3::Vector3;
pub use models::viewpoint::Viewpoint;
pub use models::visibility_exception::VisibilityException;
pub use models::wiki_page::WikiPage;

/// Name of the custom field holding an issue's stable BCF identifier.
pub const GUID_FIELD_NAME: &str = "GUID";
