use crate::{AttachmentContainer, BcfResult};

use pm_core::Project;

/// Locates the wiki page of a project that receives exported packages.
pub trait ContainerResolver {
    fn wiki_page(&self, project_id: i64, title: &str) -> BcfResult<Option<AttachmentContainer>>;
}

/// Resolver over projects already loaded in memory.
#[derive(Debug, Clone, Copy)]
pub struct ProjectCatalog<'a> {
    projects: &'a [Project],
}

impl<'a> ProjectCatalog<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self { projects }
    }

    pub fn project(&self, project_id: i64) -> Option<&'a Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}

impl ContainerResolver for ProjectCatalog<'_> {
    fn wiki_page(&self, project_id: i64, title: &str) -> BcfResult<Option<AttachmentContainer>> {
        let container = self
            .project(project_id)
            .and_then(|project| project.wiki_page(title))
            .map(|page| AttachmentContainer {
                project_id,
                page_id: page.id,
                title: page.title.clone(),
            });
        Ok(container)
    }
}
