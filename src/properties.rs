//! [crate::properties] contains the building blocks of a page layout tree:
//! container and window elements, their presentation metadata, and the
//! [LayoutNode] hierarchy the reconciler and persistence collaborators
//! exchange.

use serde::{Deserialize, Serialize};

/// Presentation metadata carried by a container element.
///
/// Everything here is copied verbatim between the persisted tree and the
/// reconciled tree; the editor client never sees or edits these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerState {
    pub display_name: Option<String>,
    pub icon: Option<String>,
    /// Markup template used to render the container.
    pub template: Option<String>,
    /// Layout factory that produced the container, when one did.
    pub factory_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    #[serde(default)]
    pub access_permissions: Vec<String>,
}

/// Presentation metadata and content binding for a window element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    /// Content kind, e.g. `portlet` or `gadget`.
    pub content_type: String,
    /// Opaque content state owned by the content provider. Persisted and
    /// restored verbatim, never interpreted here.
    pub content_state: String,
    pub title: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub show_info_bar: bool,
    #[serde(default)]
    pub show_window_state: bool,
    #[serde(default)]
    pub show_mode: bool,
    pub theme: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    #[serde(default)]
    pub access_permissions: Vec<String>,
}

/// Kind-specific state of a layout element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementState {
    Container(ContainerState),
    Window(WindowState),
}

/// A node in a page layout tree.
///
/// The same type serves as the persisted representation and as the
/// reconciliation output. `name` is the identity the editor client
/// correlates against; `storage_id` is assigned by the persistence layer
/// on first save and is absent on freshly synthesized nodes. Windows are
/// leaves; the hierarchy is strict by construction since every node owns
/// its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub storage_id: Option<String>,
    pub name: String,
    pub state: ElementState,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn container(name: impl Into<String>, state: ContainerState) -> Self {
        LayoutNode {
            storage_id: None,
            name: name.into(),
            state: ElementState::Container(state),
            children: Vec::new(),
        }
    }

    pub fn window(name: impl Into<String>, state: WindowState) -> Self {
        LayoutNode {
            storage_id: None,
            name: name.into(),
            state: ElementState::Window(state),
            children: Vec::new(),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.state, ElementState::Container(_))
    }

    pub fn is_window(&self) -> bool {
        matches!(self.state, ElementState::Window(_))
    }

    /// Number of nodes in this subtree, self included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }
}
