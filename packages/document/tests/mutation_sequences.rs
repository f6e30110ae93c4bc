//! Sequences of mutations exercised end-to-end against the invariants the
//! tree must preserve: stable identity, no cycles, unique ids, significant
//! child order.

use formcraft_document::{
    Document, DropMode, IdGenerator, Mutation, MutationOutcome, NodeType, SchemaRegistry,
};
use std::collections::HashSet;

struct Harness {
    doc: Document,
    ids: IdGenerator,
    registry: SchemaRegistry,
}

impl Harness {
    fn new() -> Self {
        Self {
            doc: Document::new("form_seq", "Sequence Tests"),
            ids: IdGenerator::new("form_seq"),
            registry: SchemaRegistry::new(),
        }
    }

    fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        mutation.apply(&mut self.doc, &mut self.ids, &self.registry)
    }

    fn insert(&mut self, node_type: NodeType, parent_id: Option<&str>) -> String {
        self.apply(Mutation::Insert {
            node_type,
            parent_id: parent_id.map(str::to_string),
            index: None,
        })
        .new_node_id
        .expect("insert should apply")
    }

    fn insert_at(&mut self, node_type: NodeType, parent_id: Option<&str>, index: usize) -> String {
        self.apply(Mutation::Insert {
            node_type,
            parent_id: parent_id.map(str::to_string),
            index: Some(index),
        })
        .new_node_id
        .expect("insert should apply")
    }

    fn move_node(&mut self, node_id: &str, target_id: Option<&str>, mode: DropMode) {
        self.apply(Mutation::Move {
            node_id: node_id.to_string(),
            target_id: target_id.map(str::to_string),
            mode,
            index: None,
        });
    }

    fn assert_unique_ids(&self) {
        let mut seen = HashSet::new();
        let mut stack: Vec<_> = self.doc.nodes.iter().collect();
        while let Some(node) = stack.pop() {
            assert!(seen.insert(node.id.clone()), "duplicate id {}", node.id);
            stack.extend(node.children.iter());
        }
    }
}

/// The end-to-end scenario from the design notes:
/// `[A(container)]` → insert header into A → move header into itself (no-op)
/// → insert button at root index 0 → move button into A.
#[test]
fn test_build_reorder_scenario() {
    let mut h = Harness::new();

    let a = h.insert(NodeType::Container, None);
    assert_eq!(h.doc.nodes.len(), 1);

    let header = h.insert(NodeType::Header, Some(&a));
    assert_eq!(h.doc.find_by_id(&a).unwrap().children.len(), 1);

    // Moving a node onto itself changes nothing.
    let before = h.doc.clone();
    h.move_node(&header, Some(&header), DropMode::Into);
    assert_eq!(h.doc, before);

    let button = h.insert_at(NodeType::Button, None, 0);
    assert_eq!(h.doc.nodes[0].id, button);
    assert_eq!(h.doc.nodes[1].id, a);

    h.move_node(&button, Some(&a), DropMode::Into);
    assert_eq!(h.doc.nodes.len(), 1);
    let children: Vec<&str> = h.doc.find_by_id(&a).unwrap().children
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(children, vec![header.as_str(), button.as_str()]);

    h.assert_unique_ids();
}

/// Mutations not targeting a node leave its id, type, and attributes
/// untouched.
#[test]
fn test_identity_preservation_under_unrelated_edits() {
    let mut h = Harness::new();

    let container = h.insert(NodeType::Container, None);
    let witness = h.insert(NodeType::Select, Some(&container));
    let witness_before = h.doc.find_by_id(&witness).unwrap().clone();

    // A flurry of edits elsewhere in the tree.
    let other = h.insert(NodeType::Input, Some(&container));
    h.apply(Mutation::Patch {
        node_id: other.clone(),
        updates: [("label".to_string(), "Renamed".into())].into_iter().collect(),
    });
    h.move_node(&other, None, DropMode::After);
    h.apply(Mutation::Remove { node_id: other });

    let witness_after = h.doc.find_by_id(&witness).unwrap();
    assert_eq!(witness_after.id, witness_before.id);
    assert_eq!(witness_after.node_type, witness_before.node_type);
    assert_eq!(witness_after.attributes, witness_before.attributes);
}

/// Removing a freshly inserted node restores the pre-insert tree.
#[test]
fn test_insert_remove_inverse() {
    let mut h = Harness::new();
    let container = h.insert(NodeType::Container, None);
    h.insert(NodeType::Header, Some(&container));

    let before = h.doc.clone();
    let inserted = h.insert_at(NodeType::Checkbox, Some(&container), 0);
    assert_ne!(h.doc, before);

    h.apply(Mutation::Remove { node_id: inserted });
    assert_eq!(h.doc, before);
}

/// Moving an ancestor into any of its descendants leaves the tree unchanged.
#[test]
fn test_no_cycle_invariant_holds_at_depth() {
    let mut h = Harness::new();
    let a = h.insert(NodeType::Container, None);
    let b = h.insert(NodeType::Form, Some(&a));
    let c = h.insert(NodeType::Container, Some(&b));
    let d = h.insert(NodeType::TabItem, Some(&c));

    let before = h.doc.clone();
    for descendant in [&b, &c, &d] {
        for mode in [DropMode::Into, DropMode::After] {
            h.move_node(&a, Some(descendant), mode);
            assert_eq!(h.doc, before, "cycle-creating move must be a no-op");
        }
    }
}

/// Promoting a deeply nested node to the root and demoting it back, through
/// the single move algorithm.
#[test]
fn test_promote_demote_across_levels() {
    let mut h = Harness::new();
    let tabs = h.insert(NodeType::Tabs, None);
    let pane = h.doc.find_by_id(&tabs).unwrap().children[0].id.clone();
    let input = h.insert(NodeType::Input, Some(&pane));

    // Promote to root.
    h.move_node(&input, None, DropMode::After);
    assert_eq!(h.doc.nodes.last().unwrap().id, input);
    assert_eq!(h.doc.nodes.last().unwrap().parent, None);

    // Demote back into the pane.
    h.move_node(&input, Some(&pane), DropMode::Into);
    let pane_node = h.doc.find_by_id(&pane).unwrap();
    assert_eq!(pane_node.children.last().unwrap().id, input);
    assert_eq!(
        pane_node.children.last().unwrap().parent.as_deref(),
        Some(pane.as_str())
    );

    h.assert_unique_ids();
}

/// A moved subtree arrives intact: children travel with their parent.
#[test]
fn test_subtree_travels_with_move() {
    let mut h = Harness::new();
    let form = h.insert(NodeType::Form, None);
    let inner = h.insert(NodeType::Container, Some(&form));
    h.insert(NodeType::Input, Some(&inner));
    h.insert(NodeType::Button, Some(&inner));
    let destination = h.insert(NodeType::Container, None);

    h.move_node(&inner, Some(&destination), DropMode::Into);

    let moved = h.doc.find_by_id(&inner).unwrap();
    assert_eq!(moved.children.len(), 2);
    assert_eq!(moved.parent.as_deref(), Some(destination.as_str()));
    assert!(h.doc.find_by_id(&form).unwrap().children.is_empty());
    assert_eq!(h.doc.node_count(), 5);
}
