use crate::dataset::Dataset;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use log::debug;
use pm_bcf::{BcfError, BcfResult, GuidStore};

/// Stamps allocated GUIDs onto the loaded dataset and saves the file after
/// each one, so a GUID is on disk before the package that uses it is stored.
///
/// With saving disabled the GUIDs only reach the in-memory copy.
#[derive(Debug)]
pub struct DatasetGuidStore {
    path: PathBuf,
    dataset: RefCell<Dataset>,
    save: bool,
}

impl DatasetGuidStore {
    pub fn new(path: impl Into<PathBuf>, dataset: Dataset, save: bool) -> Self {
        Self {
            path: path.into(),
            dataset: RefCell::new(dataset),
            save,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset.into_inner()
    }
}

impl GuidStore for DatasetGuidStore {
    fn persist(&self, issue_id: i64, guid: &str) -> BcfResult<()> {
        let mut dataset = self.dataset.borrow_mut();
        if dataset.apply_guids(&[(issue_id, guid.to_string())]) == 0 || !self.save {
            return Ok(());
        }

        dataset.save(&self.path).map_err(|e| {
            BcfError::storage(format!("saving GUID of issue {issue_id}: {e}"))
        })?;
        debug!("Saved GUID {} of issue {} to {}", guid, issue_id, self.path.display());
        Ok(())
    }
}
