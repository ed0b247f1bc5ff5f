//! # zonal-core
//!
//! A Rust library for reconciling portal page layouts against a client-declared
//! tree shape.
//!
//! ## Overview
//!
//! A portal page is rendered from a persisted layout tree of containers and
//! windows, each carrying rich metadata that the in-browser editor never
//! sees, from render templates to access permissions. When an editor
//! rearranges a page it submits only identities and nesting, typed as
//! container or application. zonal-core rebuilds the full layout tree from
//! that lossy description: surviving nodes recover their stored metadata
//! verbatim while the client tree alone dictates nesting and sibling
//! order, with novel container ids synthesized as minimal empty
//! containers.
//!
//! ### Key properties
//!
//! - **Identity preservation**: a node's metadata survives any amount of
//!   reparenting and reordering, keyed by its element name.
//! - **Structure from the client**: matched containers never keep their old
//!   children; orphaned subtrees are discarded.
//! - **Tolerant of bad input**: unresolvable client nodes are dropped with
//!   their subtrees and surfaced in a [reconcile::ReconcileReport] rather
//!   than failing the edit.
//!
//! ## Architecture
//!
//! - **[`properties`]**: the layout node model ([properties::LayoutNode],
//!   container/window element state)
//! - **[`reconcile`]**: identity index, node materialization/synthesis, and
//!   the reconciliation walk
//! - **[`codec`]**: the client wire tree and the JSON response envelope
//! - **[`services`]**: navigation and persistence collaborator traits, with
//!   in-memory implementations
//! - **[`editor`]**: the [editor::PageEditor] driver tying it all together
//! - **[`config`]**: editor settings and the TOML config provider
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use zonal_core::{
//!     config::EditorConfig,
//!     editor::PageEditor,
//!     properties::{ContainerState, LayoutNode, WindowState},
//!     services::{
//!         MemoryLayoutService, MemoryNavigationService, MemoryPageService, NavNode, Page,
//!         PageKey,
//!     },
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Wire up collaborators. Production embeddings implement the same
//!     // traits over their own stores.
//!     let navigation = Arc::new(MemoryNavigationService::new());
//!     let key = PageKey::new("classic", "home");
//!     navigation.set_site("classic", vec![NavNode::new("home", Some(key.clone()))]);
//!
//!     let pages = Arc::new(MemoryPageService::new());
//!     pages.insert(Page {
//!         key,
//!         layout_id: "layout-home".to_string(),
//!         factory_id: None,
//!         title: None,
//!     });
//!
//!     let layouts = Arc::new(MemoryLayoutService::new());
//!     let mut root = LayoutNode::container("home-root", ContainerState::default());
//!     root.children.push(LayoutNode::window(
//!         "weather",
//!         WindowState {
//!             title: Some("Weather".to_string()),
//!             ..Default::default()
//!         },
//!     ));
//!     layouts.insert("layout-home", root);
//!
//!     // Apply an edit: keep the weather window as the only child.
//!     let editor = PageEditor::new(navigation, pages, layouts, EditorConfig::default());
//!     let body = r#"{"childrens":[{"id":"weather","type":"application","childrens":[]}]}"#;
//!     let response = editor.edit("/home", body)?.expect("page resolves");
//!     assert!(response.is_success());
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod editor;
pub mod error;
pub mod properties;
pub mod reconcile;
pub mod services;
#[cfg(test)]
mod tests;

pub use error::*;
