//! Viewpoint - a saved camera plus per-object visibility state.

use crate::{PerspectiveCamera, VisibilityException};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub guid: String,
    pub camera: PerspectiveCamera,
    #[serde(default = "default_visibility")]
    pub default_visibility: bool,
    #[serde(default)]
    pub exceptions: Vec<VisibilityException>,
    /// PNG snapshot on disk, copied into the package as `snapshot.png`
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

fn default_visibility() -> bool {
    true
}
