//! Project entity - owner of issues and of the wiki that receives exports.

use crate::WikiPage;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub wiki_pages: Vec<WikiPage>,
}

impl Project {
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            wiki_pages: Vec::new(),
        }
    }

    /// Find the wiki page with the given title
    pub fn wiki_page(&self, title: &str) -> Option<&WikiPage> {
        self.wiki_pages.iter().find(|page| page.title == title)
    }
}
