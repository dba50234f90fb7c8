//! Command implementations, independent of argument parsing.

use crate::dataset::Dataset;
use crate::dataset_guid_store::DatasetGuidStore;
use crate::error::{CliError, Result as CliResult};
use crate::fs_attachment_store::FsAttachmentStore;

use std::path::{Path, PathBuf};

use log::info;
use pm_bcf::{
    BcfExporter, GuidPolicy, GuidStore, ProjectCatalog, ProjectSummary, StoredAttachment,
    TopicSummary, project_topics,
};
use pm_config::BcfConfig;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub data: PathBuf,
    pub name: String,
    pub author: String,
    pub issue_ids: Vec<i64>,
    /// Save newly allocated GUIDs into the dataset file
    pub write_back: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocatedGuid {
    pub issue_id: i64,
    pub guid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    pub attachment: StoredAttachment,
    pub path: PathBuf,
    pub entries: Vec<String>,
    pub allocated_guids: Vec<AllocatedGuid>,
    pub written_back: bool,
}

pub fn run_export(
    config: &BcfConfig,
    output_dir: &Path,
    request: &ExportRequest,
) -> CliResult<ExportReport> {
    let dataset = Dataset::load(&request.data)?;
    let issues = dataset.select_issues(&request.issue_ids)?;
    let projects = dataset.projects.clone();

    let catalog = ProjectCatalog::new(&projects);
    let guids = DatasetGuidStore::new(&request.data, dataset, request.write_back);
    let store = FsAttachmentStore::new(output_dir);

    let outcome = BcfExporter::from_config(config, &catalog, &guids, &store).export(
        &request.author,
        &request.name,
        &issues,
    )?;

    let written_back = request.write_back && !outcome.allocated_guids.is_empty();
    if written_back {
        info!(
            "Saved {} new GUID(s) to {}",
            outcome.allocated_guids.len(),
            request.data.display()
        );
    }

    Ok(ExportReport {
        path: store.file_path(&outcome.attachment),
        attachment: outcome.attachment,
        entries: outcome.entries,
        allocated_guids: outcome
            .allocated_guids
            .into_iter()
            .map(|(issue_id, guid)| AllocatedGuid { issue_id, guid })
            .collect(),
        written_back,
    })
}

pub fn run_topics(
    config: &BcfConfig,
    data: &Path,
    project_id: i64,
    type_name: Option<&str>,
    write_back: bool,
) -> CliResult<Vec<TopicSummary>> {
    let dataset = Dataset::load(data)?;
    let policy = GuidPolicy::from_allocate_flag(config.allocate_guids);

    let resolutions = project_topics(&dataset.issues, project_id, type_name, policy);

    let guids = DatasetGuidStore::new(data, dataset, write_back);
    for resolution in resolutions.iter().filter(|r| r.allocated) {
        guids.persist(resolution.issue.id, &resolution.guid)?;
    }

    Ok(resolutions.iter().map(TopicSummary::from).collect())
}

pub fn run_projects(data: &Path) -> CliResult<Vec<ProjectSummary>> {
    let dataset = Dataset::load(data)?;
    Ok(dataset.projects.iter().map(ProjectSummary::from).collect())
}

/// Serialize a command result for stdout.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| CliError::output(e))
}
