use serde::{Deserialize, Serialize};

/// A model object whose visibility differs from the viewpoint default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityException {
    pub ifc_guid: String,
    pub originating_system: Option<String>,
    pub authoring_tool_id: Option<String>,
}
