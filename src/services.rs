//! Collaborator interfaces around the reconciliation core: navigation
//! resolution and page/layout persistence. The in-memory implementations
//! back the test suite and lightweight embeddings; production deployments
//! supply their own stores behind the same traits.

use std::{collections::BTreeMap, fmt};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::ZonalError, properties::LayoutNode};

/// Persistent identity of a page within a site.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageKey {
    pub site: String,
    pub name: String,
}

impl PageKey {
    pub fn new(site: impl Into<String>, name: impl Into<String>) -> Self {
        PageKey {
            site: site.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}::{}", self.site, self.name)
    }
}

/// A stored page record. `layout_id` keys the page's persisted layout
/// tree; `factory_id` names the layout template it renders with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub key: PageKey,
    pub layout_id: String,
    pub factory_id: Option<String>,
    pub title: Option<String>,
}

/// A node in a site's navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    pub name: String,
    pub page: Option<PageKey>,
    #[serde(default)]
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn new(name: impl Into<String>, page: Option<PageKey>) -> Self {
        NavNode {
            name: name.into(),
            page,
            children: Vec::new(),
        }
    }
}

pub trait NavigationService: Send + Sync {
    /// Resolve a path, already split into segments, to its navigation
    /// node within `site`. Any unmatched segment resolves the whole path
    /// to `None`.
    fn resolve(&self, site: &str, segments: &[String]) -> Result<Option<NavNode>, ZonalError>;
}

pub trait PageService: Send + Sync {
    fn load_page(&self, key: &PageKey) -> Result<Option<Page>, ZonalError>;
    fn save_page(&self, page: &Page) -> Result<(), ZonalError>;
}

pub trait LayoutService: Send + Sync {
    fn load_layout(&self, layout_id: &str) -> Result<Option<LayoutNode>, ZonalError>;
    fn save_layout(&self, layout_id: &str, root: &LayoutNode) -> Result<(), ZonalError>;
}

/// Navigation trees held in memory, one forest per site.
#[derive(Debug, Default)]
pub struct MemoryNavigationService {
    sites: RwLock<BTreeMap<String, Vec<NavNode>>>,
}

impl MemoryNavigationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_site(&self, site: impl Into<String>, roots: Vec<NavNode>) {
        self.sites.write().insert(site.into(), roots);
    }
}

impl NavigationService for MemoryNavigationService {
    fn resolve(&self, site: &str, segments: &[String]) -> Result<Option<NavNode>, ZonalError> {
        if segments.is_empty() {
            return Ok(None);
        }
        let sites = self.sites.read();
        let Some(roots) = sites.get(site) else {
            tracing::debug!("No navigation loaded for site '{site}'");
            return Ok(None);
        };
        let mut current = roots.iter().find(|node| node.name == segments[0]);
        for name in &segments[1..] {
            match current {
                Some(node) => current = node.children.iter().find(|child| &child.name == name),
                None => break,
            }
        }
        Ok(current.cloned())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPageService {
    pages: RwLock<BTreeMap<PageKey, Page>>,
}

impl MemoryPageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, page: Page) {
        self.pages.write().insert(page.key.clone(), page);
    }
}

impl PageService for MemoryPageService {
    fn load_page(&self, key: &PageKey) -> Result<Option<Page>, ZonalError> {
        Ok(self.pages.read().get(key).cloned())
    }

    fn save_page(&self, page: &Page) -> Result<(), ZonalError> {
        tracing::debug!("Saving page {}", page.key);
        self.pages.write().insert(page.key.clone(), page.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryLayoutService {
    layouts: RwLock<BTreeMap<String, LayoutNode>>,
}

impl MemoryLayoutService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, layout_id: impl Into<String>, root: LayoutNode) {
        self.layouts.write().insert(layout_id.into(), root);
    }
}

impl LayoutService for MemoryLayoutService {
    fn load_layout(&self, layout_id: &str) -> Result<Option<LayoutNode>, ZonalError> {
        Ok(self.layouts.read().get(layout_id).cloned())
    }

    fn save_layout(&self, layout_id: &str, root: &LayoutNode) -> Result<(), ZonalError> {
        let mut stored = root.clone();
        assign_storage_ids(&mut stored);
        tracing::debug!(
            "Saving layout '{layout_id}' with {} node(s)",
            stored.node_count()
        );
        self.layouts.write().insert(layout_id.to_string(), stored);
        Ok(())
    }
}

// Nodes acquire persistence identity at save time; reconciled nodes that
// already carry one keep it.
fn assign_storage_ids(node: &mut LayoutNode) {
    if node.storage_id.is_none() {
        node.storage_id = Some(Uuid::new_v4().to_string());
    }
    for child in &mut node.children {
        assign_storage_ids(child);
    }
}
