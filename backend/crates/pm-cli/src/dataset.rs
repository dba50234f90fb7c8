//! JSON dataset of projects and issues the CLI exports from.

use crate::error::{CliError, Result as CliResult};

use std::io::Write;
use std::path::{Path, PathBuf};

use pm_core::{Issue, Project};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl Dataset {
    /// Load a dataset. Relative snapshot paths are resolved against the
    /// directory holding the file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let mut dataset: Dataset =
            serde_json::from_str(&contents).map_err(|e| CliError::dataset(path, e))?;

        let dir = base_dir(path);
        for snapshot in dataset.snapshots_mut() {
            if snapshot.is_relative() {
                *snapshot = dir.join(&*snapshot);
            }
        }
        Ok(dataset)
    }

    /// Write the dataset back, replacing the file atomically.
    ///
    /// Snapshot paths inside the file's directory are written relative to it.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let dir = base_dir(path);

        let mut stored = self.clone();
        for snapshot in stored.snapshots_mut() {
            if let Ok(relative) = snapshot.strip_prefix(dir) {
                *snapshot = relative.to_path_buf();
            }
        }
        let json =
            serde_json::to_string_pretty(&stored).map_err(|e| CliError::dataset(path, e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| CliError::io(dir, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| CliError::io(file.path(), e))?;
        file.persist(path)
            .map_err(|e| CliError::io(path, e.error))?;
        Ok(())
    }

    /// Issues with the given ids, in the order given. All issues when `ids` is empty.
    pub fn select_issues(&self, ids: &[i64]) -> CliResult<Vec<Issue>> {
        if ids.is_empty() {
            return Ok(self.issues.clone());
        }

        ids.iter()
            .map(|id| {
                self.issues
                    .iter()
                    .find(|issue| issue.id == *id)
                    .cloned()
                    .ok_or_else(|| CliError::unknown_issue(*id))
            })
            .collect()
    }

    fn snapshots_mut(&mut self) -> impl Iterator<Item = &mut PathBuf> {
        self.issues
            .iter_mut()
            .filter_map(|issue| issue.viewpoint.as_mut())
            .filter_map(|viewpoint| viewpoint.snapshot.as_mut())
    }

    /// Stamp GUIDs onto the matching issues. Returns how many issues changed.
    pub fn apply_guids(&mut self, guids: &[(i64, String)]) -> usize {
        let mut changed = 0;
        for (issue_id, guid) in guids {
            if let Some(issue) = self.issues.iter_mut().find(|i| i.id == *issue_id)
                && issue.guid() != Some(guid.as_str())
            {
                *issue = issue.with_guid(guid.clone());
                changed += 1;
            }
        }
        changed
    }
}

fn base_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
