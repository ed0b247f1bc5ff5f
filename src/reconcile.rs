//! Layout tree reconciliation.
//!
//! The editor client submits a tree of `(id, type)` pairs describing the
//! desired shape of a page. Reconciliation walks that tree depth-first
//! against the persisted layout, rebuilding each surviving node from its
//! stored metadata and synthesizing empty containers for novel ids. The
//! client tree is the sole source of structure: a matched container never
//! keeps its old children, so moving a node and pruning a subtree are
//! both just declarations of the new shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    codec::{ClientNode, NodeKind},
    error::ZonalError,
    properties::{ContainerState, LayoutNode},
};

/// Lookup table from element name to its node in the persisted tree.
///
/// Built once per reconciliation by a pre-order walk. Element names are
/// expected to be unique within one tree; when one repeats anyway, the
/// first occurrence wins, which preserves the first-found semantics of a
/// depth-first search.
pub struct IdentityIndex<'a> {
    by_name: BTreeMap<&'a str, &'a LayoutNode>,
}

impl<'a> IdentityIndex<'a> {
    pub fn build(root: &'a LayoutNode) -> Self {
        let mut index = IdentityIndex {
            by_name: BTreeMap::new(),
        };
        index.insert_subtree(root);
        index
    }

    fn insert_subtree(&mut self, node: &'a LayoutNode) {
        self.by_name.entry(node.name.as_str()).or_insert(node);
        for child in &node.children {
            self.insert_subtree(child);
        }
    }

    pub fn find(&self, id: &str) -> Option<&'a LayoutNode> {
        self.by_name.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Rebuild a persisted node as a fresh output node.
///
/// Storage identity, name, and the whole element state are copied
/// verbatim. Children are left empty: the reconciler fills them from the
/// client tree, never from the node's previous subtree.
pub fn materialize(node: &LayoutNode) -> LayoutNode {
    LayoutNode {
        storage_id: node.storage_id.clone(),
        name: node.name.clone(),
        state: node.state.clone(),
        children: Vec::new(),
    }
}

/// Construct a minimal node for an id with no match in the persisted tree.
///
/// Only containers can be created this way: the id becomes the element
/// name and every metadata field starts empty. A novel `application` id
/// would need portlet content instantiation, which the editor does not
/// do, so it yields `None` and the caller records the skip.
pub fn synthesize(id: &str, kind: NodeKind) -> Option<LayoutNode> {
    match kind {
        NodeKind::Container => Some(LayoutNode::container(id, ContainerState::default())),
        NodeKind::Application | NodeKind::Other => None,
    }
}

/// Why a client node was dropped from the reconciled tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// An `application` id with no stored counterpart.
    UnmatchedApplication,
    /// The type string was neither `container` nor `application`.
    UnrecognizedKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedNode {
    pub id: String,
    pub kind: String,
    pub reason: SkipReason,
}

/// Summary of one reconciliation pass.
///
/// Unresolvable client nodes do not fail the edit; they are dropped
/// together with their declared subtrees and surfaced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub skipped: Vec<SkippedNode>,
}

impl ReconcileReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A reconciled layout tree plus its pass summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub root: LayoutNode,
    pub report: ReconcileReport,
}

/// Rebuild `existing` into the shape declared by the client forest.
///
/// The output root is always rebuilt from the existing root; the client
/// only ever declares the forest beneath it. Sibling order follows the
/// client arrays exactly. Declaring children under a window element fails
/// the whole edit with [ZonalError::WindowChildren].
pub fn reconcile(
    existing: &LayoutNode,
    children: &[ClientNode],
) -> Result<Reconciled, ZonalError> {
    let index = IdentityIndex::build(existing);
    let mut report = ReconcileReport::default();
    let mut root = materialize(existing);
    for child in children {
        build_subtree(&index, child, &mut root, &mut report)?;
    }
    tracing::debug!(
        "Reconciled layout '{}': {} node(s) in, {} node(s) out, {} skipped",
        existing.name,
        index.len(),
        root.node_count(),
        report.skipped_count()
    );
    Ok(Reconciled { root, report })
}

fn build_subtree(
    index: &IdentityIndex<'_>,
    client: &ClientNode,
    parent: &mut LayoutNode,
    report: &mut ReconcileReport,
) -> Result<(), ZonalError> {
    let mut node = match index.find(&client.id) {
        Some(existing) => materialize(existing),
        None => match synthesize(&client.id, client.node_kind()) {
            Some(node) => node,
            None => {
                let reason = match client.node_kind() {
                    NodeKind::Application => SkipReason::UnmatchedApplication,
                    _ => SkipReason::UnrecognizedKind,
                };
                tracing::warn!(
                    "Skipping unresolvable client node '{}' (type '{}') and its subtree",
                    client.id,
                    client.kind
                );
                report.skipped.push(SkippedNode {
                    id: client.id.clone(),
                    kind: client.kind.clone(),
                    reason,
                });
                return Ok(());
            }
        },
    };

    if node.is_window() && !client.children.is_empty() {
        return Err(ZonalError::WindowChildren(client.id.clone()));
    }

    for child in &client.children {
        build_subtree(index, child, &mut node, report)?;
    }
    parent.children.push(node);
    Ok(())
}
