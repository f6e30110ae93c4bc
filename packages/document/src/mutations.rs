//! # Tree Mutations
//!
//! The four structural operations on a form document. Every mutation is
//! total over well-typed input: invalid requests (missing parent,
//! self-target, cycle-creating move) resolve to a documented fallback
//! instead of erroring, keeping the editing surface available. Fallback
//! paths emit `tracing` warnings so hosts can surface diagnostics.
//!
//! ## Mutation semantics
//!
//! ### Insert
//! - Creates a node with a fresh id and the registry defaults for its type.
//! - Tab sets auto-populate three tab-item children at creation; a tab item
//!   inserted on its own is labeled for its position in the target set.
//! - Missing parent: no-op.
//!
//! ### Remove
//! - Deletes the node and its entire subtree. Idempotent.
//!
//! ### Patch
//! - Shallow-merges into `attributes` only; `id`, `type`, and `children`
//!   are untouched. No-op when the node is absent.
//!
//! ### Move
//! - Atomic detach + reinsert; handles reparenting, reordering within a
//!   parent, and promotion/demotion across nesting levels uniformly.
//! - Self-target and cycle-creating moves are no-ops.
//! - Unlocatable targets fall back to appending at the root.

use crate::document::Document;
use crate::id_generator::IdGenerator;
use crate::node::Node;
use formcraft_schema::{AttrValue, Attributes, NodeType, SchemaRegistry};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of panes a freshly created tab set starts with.
const TABS_INITIAL_PANES: usize = 3;

/// How a moved or dropped node relates to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropMode {
    /// Become a child of the target.
    Into,
    /// Become the next sibling of the target.
    After,
}

/// One structural edit, applied atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// Create a node and splice it into `parent_id`'s children (root
    /// sequence when `None`) at `index`, appending when omitted.
    Insert {
        node_type: NodeType,
        parent_id: Option<String>,
        index: Option<usize>,
    },

    /// Delete the node and its subtree wherever it occurs.
    Remove { node_id: String },

    /// Shallow-merge attribute updates into the node.
    Patch {
        node_id: String,
        updates: Attributes,
    },

    /// Relocate an existing node relative to `target_id`.
    Move {
        node_id: String,
        target_id: Option<String>,
        mode: DropMode,
        index: Option<usize>,
    },
}

/// What a mutation did. `applied` is false on no-op fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationOutcome {
    pub applied: bool,
    pub new_node_id: Option<String>,
}

impl MutationOutcome {
    fn applied() -> Self {
        Self {
            applied: true,
            new_node_id: None,
        }
    }

    fn noop() -> Self {
        Self::default()
    }

    fn inserted(id: String) -> Self {
        Self {
            applied: true,
            new_node_id: Some(id),
        }
    }
}

impl Mutation {
    /// Apply this mutation to the document. Total: never fails for
    /// well-typed input.
    pub fn apply(
        &self,
        doc: &mut Document,
        ids: &mut IdGenerator,
        registry: &SchemaRegistry,
    ) -> MutationOutcome {
        match self {
            Mutation::Insert {
                node_type,
                parent_id,
                index,
            } => apply_insert(doc, ids, registry, *node_type, parent_id.as_deref(), *index),

            Mutation::Remove { node_id } => apply_remove(doc, node_id),

            Mutation::Patch { node_id, updates } => apply_patch(doc, node_id, updates),

            Mutation::Move {
                node_id,
                target_id,
                mode,
                index,
            } => apply_move(doc, node_id, target_id.as_deref(), *mode, *index),
        }
    }
}

fn apply_insert(
    doc: &mut Document,
    ids: &mut IdGenerator,
    registry: &SchemaRegistry,
    node_type: NodeType,
    parent_id: Option<&str>,
    index: Option<usize>,
) -> MutationOutcome {
    if let Some(pid) = parent_id {
        if !doc.contains(pid) {
            warn!(parent_id = pid, ?node_type, "insert under missing parent; no-op");
            return MutationOutcome::noop();
        }
    }

    let node = create_node(doc, ids, registry, node_type, parent_id);
    let new_id = node.id.clone();

    let spliced = splice(doc, parent_id, node, index);
    debug_assert!(spliced, "parent existence checked above");

    MutationOutcome::inserted(new_id)
}

/// Build a node per the lifecycle rules: fresh id, registry defaults,
/// tab sets pre-populated with panes.
fn create_node(
    doc: &Document,
    ids: &mut IdGenerator,
    registry: &SchemaRegistry,
    node_type: NodeType,
    parent_id: Option<&str>,
) -> Node {
    let mut node = Node::new(
        ids.next_unused(doc),
        node_type,
        registry.default_attributes(node_type),
        parent_id.map(str::to_string),
    );

    // A pane added on its own is named for its position in the target set.
    if node_type == NodeType::TabItem {
        let siblings = match parent_id {
            None => doc.nodes.len(),
            Some(pid) => doc
                .find_by_id(pid)
                .map(|parent| parent.children.len())
                .unwrap_or(0),
        };
        node.attributes.insert(
            "label".to_string(),
            AttrValue::String(format!("Tab {}", siblings + 1)),
        );
    }

    if node_type == NodeType::Tabs {
        for idx in 0..TABS_INITIAL_PANES {
            let mut pane = Node::new(
                ids.next_unused(doc),
                NodeType::TabItem,
                registry.default_attributes(NodeType::TabItem),
                Some(node.id.clone()),
            );
            pane.attributes.insert(
                "label".to_string(),
                AttrValue::String(format!("Tab {}", idx + 1)),
            );
            node.children.push(pane);
        }
    }

    node
}

/// Splice `node` into the sequence owned by `parent_id` (root when `None`).
/// Returns false when the parent cannot be found.
fn splice(doc: &mut Document, parent_id: Option<&str>, node: Node, index: Option<usize>) -> bool {
    let children = match parent_id {
        None => &mut doc.nodes,
        Some(pid) => match doc.find_by_id_mut(pid) {
            Some(parent) => &mut parent.children,
            None => return false,
        },
    };

    match index {
        Some(i) => children.insert(i.min(children.len()), node),
        None => children.push(node),
    }
    true
}

fn apply_remove(doc: &mut Document, node_id: &str) -> MutationOutcome {
    match detach(&mut doc.nodes, node_id) {
        Some(_) => MutationOutcome::applied(),
        None => MutationOutcome::noop(),
    }
}

fn apply_patch(doc: &mut Document, node_id: &str, updates: &Attributes) -> MutationOutcome {
    match doc.find_by_id_mut(node_id) {
        Some(node) => {
            node.attributes
                .extend(updates.iter().map(|(k, v)| (k.clone(), v.clone())));
            MutationOutcome::applied()
        }
        None => MutationOutcome::noop(),
    }
}

fn apply_move(
    doc: &mut Document,
    node_id: &str,
    target_id: Option<&str>,
    mode: DropMode,
    index: Option<usize>,
) -> MutationOutcome {
    if target_id == Some(node_id) {
        return MutationOutcome::noop();
    }

    // Cycle guard: a node can never land inside its own subtree.
    if let Some(tid) = target_id {
        if doc.is_descendant(node_id, tid) {
            return MutationOutcome::noop();
        }
    }

    let Some(mut moving) = detach(&mut doc.nodes, node_id) else {
        return MutationOutcome::noop();
    };

    match mode {
        DropMode::Into => {
            // The cycle guard above only rules out descendants; the target
            // may simply not exist, in which case we fall back to the root.
            let target_known = match target_id {
                None => true,
                Some(tid) => doc.contains(tid),
            };
            if target_known {
                moving.parent = target_id.map(str::to_string);
                let spliced = splice(doc, target_id, moving, index);
                debug_assert!(spliced, "target existence checked above");
            } else {
                warn!(node_id, ?target_id, "move target not found; appending at root");
                moving.parent = None;
                doc.nodes.push(moving);
            }
        }
        DropMode::After => match target_id.and_then(|tid| doc.find_parent_and_index(tid)) {
            Some(placement) => {
                moving.parent = placement.parent_id.clone();
                let spliced = splice(
                    doc,
                    placement.parent_id.as_deref(),
                    moving,
                    Some(placement.index + 1),
                );
                debug_assert!(spliced, "placement parent resolved above");
            }
            None => {
                if target_id.is_some() {
                    warn!(node_id, ?target_id, "move target not found; appending at root");
                }
                moving.parent = None;
                doc.nodes.push(moving);
            }
        },
    }

    MutationOutcome::applied()
}

/// Remove the node with `id` from wherever it occurs and return it,
/// subtree intact.
fn detach(nodes: &mut Vec<Node>, id: &str) -> Option<Node> {
    if let Some(pos) = nodes.iter().position(|node| node.id == id) {
        return Some(nodes.remove(pos));
    }
    for node in nodes {
        if let Some(found) = detach(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
