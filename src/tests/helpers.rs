//! Shared fixtures for layout reconciliation tests

use std::sync::Arc;

use crate::{
    codec::ClientNode,
    config::EditorConfig,
    editor::PageEditor,
    properties::{ContainerState, ElementState, LayoutNode, WindowState},
    services::{
        MemoryLayoutService, MemoryNavigationService, MemoryPageService, NavNode, Page, PageKey,
    },
};

/// A persisted container carrying the kind of metadata the browser editor
/// never submits back.
pub fn stored_container(name: &str, title: &str, children: Vec<LayoutNode>) -> LayoutNode {
    LayoutNode {
        storage_id: Some(format!("st-{name}")),
        name: name.to_string(),
        state: ElementState::Container(ContainerState {
            template: Some("system:/groovy/portal/webui/container/UIContainer.gtmpl".to_string()),
            title: Some(title.to_string()),
            access_permissions: vec!["Everyone".to_string()],
            ..Default::default()
        }),
        children,
    }
}

pub fn stored_window(name: &str, title: &str) -> LayoutNode {
    LayoutNode {
        storage_id: Some(format!("st-{name}")),
        name: name.to_string(),
        state: ElementState::Window(WindowState {
            content_type: "portlet".to_string(),
            content_state: format!("web/{name}"),
            title: Some(title.to_string()),
            show_info_bar: true,
            theme: Some("Default:DefaultTheme".to_string()),
            access_permissions: vec!["Everyone".to_string()],
            ..Default::default()
        }),
        children: Vec::new(),
    }
}

/// Convert a layout tree back into the client wire shape, the way the
/// browser editor would re-submit it.
pub fn to_client(node: &LayoutNode) -> ClientNode {
    let kind = match node.state {
        ElementState::Container(_) => "container",
        ElementState::Window(_) => "application",
    };
    ClientNode {
        id: node.name.clone(),
        kind: kind.to_string(),
        children: node.children.iter().map(to_client).collect(),
    }
}

/// An editor over in-memory collaborators, serving site `classic` with a
/// single page `home` whose stored layout is `root`.
pub struct EditorFixture {
    pub editor: PageEditor,
    pub pages: Arc<MemoryPageService>,
    pub layouts: Arc<MemoryLayoutService>,
    pub page_key: PageKey,
    pub layout_id: String,
}

pub fn editor_fixture(root: LayoutNode) -> EditorFixture {
    let navigation = Arc::new(MemoryNavigationService::new());
    let page_key = PageKey::new("classic", "home");
    navigation.set_site("classic", vec![NavNode::new("home", Some(page_key.clone()))]);

    let pages = Arc::new(MemoryPageService::new());
    pages.insert(Page {
        key: page_key.clone(),
        layout_id: "layout-home".to_string(),
        factory_id: None,
        title: Some("Home".to_string()),
    });

    let layouts = Arc::new(MemoryLayoutService::new());
    layouts.insert("layout-home", root);

    let editor = PageEditor::new(
        navigation,
        pages.clone(),
        layouts.clone(),
        EditorConfig::default(),
    );

    EditorFixture {
        editor,
        pages,
        layouts,
        page_key,
        layout_id: "layout-home".to_string(),
    }
}
