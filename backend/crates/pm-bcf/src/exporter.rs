//! Export pipeline: resolve GUIDs, build the package, attach it to the
//! project wiki.
//!
//! Nothing reaches the attachment store unless every earlier step succeeded.

use crate::{
    AttachmentStore, BcfError, BcfPackage, BcfResult, BcfTopic, ContainerResolver, GuidPolicy,
    GuidStore, NewAttachment, PACKAGE_CONTENT_TYPE, PackageBuilder, StoredAttachment,
    resolve_guid,
};

use log::{info, warn};
use pm_config::BcfConfig;
use pm_core::Issue;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub attachment: StoredAttachment,
    /// Exported issues, stamped with any GUIDs allocated along the way
    pub issues: Vec<Issue>,
    /// `(issue id, guid)` for every GUID allocated by this export
    pub allocated_guids: Vec<(i64, String)>,
    pub entries: Vec<String>,
}

pub struct BcfExporter<'a> {
    builder: PackageBuilder,
    guid_policy: GuidPolicy,
    wiki_page_title: String,
    containers: &'a dyn ContainerResolver,
    guids: &'a dyn GuidStore,
    attachments: &'a dyn AttachmentStore,
}

impl<'a> BcfExporter<'a> {
    pub fn new(
        builder: PackageBuilder,
        guid_policy: GuidPolicy,
        wiki_page_title: impl Into<String>,
        containers: &'a dyn ContainerResolver,
        guids: &'a dyn GuidStore,
        attachments: &'a dyn AttachmentStore,
    ) -> Self {
        Self {
            builder,
            guid_policy,
            wiki_page_title: wiki_page_title.into(),
            containers,
            guids,
            attachments,
        }
    }

    pub fn from_config(
        config: &BcfConfig,
        containers: &'a dyn ContainerResolver,
        guids: &'a dyn GuidStore,
        attachments: &'a dyn AttachmentStore,
    ) -> Self {
        Self::new(
            PackageBuilder::from_config(config),
            GuidPolicy::from_allocate_flag(config.allocate_guids),
            config.wiki_page_title.clone(),
            containers,
            guids,
            attachments,
        )
    }

    /// Export `issues` as one BCF package attached to the wiki page of the
    /// first issue's project.
    pub fn export(
        &self,
        author: &str,
        file_name: &str,
        issues: &[Issue],
    ) -> BcfResult<ExportOutcome> {
        let Some(first) = issues.first() else {
            return Err(BcfError::empty_input());
        };

        info!(
            "Exporting {} issue(s) of project {} as BCF package \"{}\"",
            issues.len(),
            first.project_id,
            file_name
        );

        let container = self
            .containers
            .wiki_page(first.project_id, &self.wiki_page_title)?
            .ok_or_else(|| BcfError::missing_container(first.project_id, &self.wiki_page_title))?;

        let mut allocated_guids = Vec::new();
        let topics: Vec<BcfTopic> = issues
            .iter()
            .enumerate()
            .map(|(index, issue)| {
                let resolution = resolve_guid(issue, self.guid_policy);
                if resolution.allocated {
                    allocated_guids.push((issue.id, resolution.guid.clone()));
                }
                BcfTopic::from_resolution(resolution, index)
            })
            .collect();

        let BcfPackage {
            file_name,
            bytes,
            entries,
        } = self.builder.build(file_name, &topics)?;

        for (issue_id, guid) in &allocated_guids {
            warn!("Assigning new BCF GUID {} to issue {}", guid, issue_id);
            self.guids.persist(*issue_id, guid)?;
        }

        let attachment = self.attachments.store(NewAttachment {
            author: author.to_string(),
            container,
            content_type: PACKAGE_CONTENT_TYPE.to_string(),
            file_name,
            bytes,
        })?;

        info!(
            "Stored BCF package {} ({} bytes) as attachment {}",
            attachment.file_name, attachment.size, attachment.id
        );

        Ok(ExportOutcome {
            attachment,
            issues: topics.into_iter().map(|t| t.issue).collect(),
            allocated_guids,
            entries,
        })
    }
}
