use serde::{Deserialize, Serialize};

/// A custom-field value attached to an issue (e.g. the `GUID` field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomValue {
    pub field_name: String,
    pub value: String,
}

impl CustomValue {
    pub fn new(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: value.into(),
        }
    }
}
