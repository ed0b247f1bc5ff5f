//! The edit driver: resolves a page path through navigation, loads the
//! page's persisted layout, reconciles the client tree against it, and
//! hands the result back to the persistence collaborators.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    codec::{parse_request, EditResponse},
    config::EditorConfig,
    error::ZonalError,
    properties::LayoutNode,
    reconcile::{reconcile, ReconcileReport},
    services::{LayoutService, NavigationService, Page, PageService},
};

/// Applies client-submitted layout edits to pages.
///
/// Collaborators are injected at construction; the editor itself holds no
/// mutable state and one instance may serve any number of requests.
pub struct PageEditor {
    navigation: Arc<dyn NavigationService>,
    pages: Arc<dyn PageService>,
    layouts: Arc<dyn LayoutService>,
    config: EditorConfig,
}

impl PageEditor {
    pub fn new(
        navigation: Arc<dyn NavigationService>,
        pages: Arc<dyn PageService>,
        layouts: Arc<dyn LayoutService>,
        config: EditorConfig,
    ) -> Self {
        PageEditor {
            navigation,
            pages,
            layouts,
            config,
        }
    }

    /// Apply a client-submitted layout edit to the page at `path`.
    ///
    /// Returns `Ok(None)` when the path does not resolve to a stored page
    /// and its layout: there is nothing to edit and the transport renders
    /// an empty body. Failures inside the edit itself, from payload
    /// parsing through persistence, are folded into the generic error
    /// envelope; only collaborator failures during resolution propagate
    /// as `Err`.
    pub fn edit(&self, path: &str, payload: &str) -> Result<Option<EditResponse>, ZonalError> {
        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        let Some(nav) = self.navigation.resolve(&self.config.site, &segments)? else {
            tracing::debug!("No navigation node for '{path}', nothing to edit");
            return Ok(None);
        };
        let Some(page_key) = nav.page else {
            tracing::debug!("Navigation node '{}' carries no page reference", nav.name);
            return Ok(None);
        };
        let Some(page) = self.pages.load_page(&page_key)? else {
            tracing::debug!("Page {page_key} is not stored");
            return Ok(None);
        };
        let Some(existing) = self.layouts.load_layout(&page.layout_id)? else {
            tracing::debug!("Page {page_key} has no stored layout '{}'", page.layout_id);
            return Ok(None);
        };

        match self.apply(&page, &existing, payload) {
            Ok(report) => {
                if !report.skipped.is_empty() {
                    tracing::warn!(
                        "Edit of {page_key} dropped {} unresolvable client node(s)",
                        report.skipped_count()
                    );
                }
                Ok(Some(EditResponse::success("OK")))
            }
            Err(err) => {
                tracing::error!("Edit of {page_key} failed: {err}");
                Ok(Some(EditResponse::error("can not edit")))
            }
        }
    }

    /// The envelope (or `{}` when the path resolves to nothing) as a JSON
    /// value, matching the wire contract of the edit endpoint.
    pub fn edit_json(&self, path: &str, payload: &str) -> Result<Value, ZonalError> {
        match self.edit(path, payload)? {
            Some(response) => Ok(serde_json::to_value(response)?),
            None => Ok(Value::Object(serde_json::Map::new())),
        }
    }

    // The guarded phase of an edit: parse, reconcile, persist, and apply
    // a layout template switch when the payload carries one.
    fn apply(
        &self,
        page: &Page,
        existing: &LayoutNode,
        payload: &str,
    ) -> Result<ReconcileReport, ZonalError> {
        let request = parse_request(payload)?;
        let reconciled = reconcile(existing, &request.children)?;
        self.layouts.save_layout(&page.layout_id, &reconciled.root)?;

        if let Some(layout_id) = request.layout_id.as_deref().filter(|id| !id.is_empty()) {
            let mut updated = page.clone();
            updated.factory_id = Some(layout_id.to_string());
            self.pages.save_page(&updated)?;
        }

        Ok(reconciled.report)
    }
}
