use crate::diagnostic::Diagnostic;
use formcraft_document::{Document, Node};
use formcraft_schema::SchemaRegistry;
use std::collections::HashSet;

/// Options for configuring validation
#[derive(Debug, Default)]
pub struct ValidateOptions {
    /// Custom schema registry (uses default if None)
    pub registry: Option<SchemaRegistry>,
}

/// Validate a form document and return every violation found.
///
/// Never short-circuits: each node is checked against the registry's
/// nesting rules, and tree-wide identity invariants (unique ids, consistent
/// parent back-references) are checked alongside.
pub fn validate_document(document: &Document, options: ValidateOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();
    let mut seen_ids = HashSet::new();

    for node in &document.nodes {
        check_node(node, None, &registry, &mut seen_ids, &mut diagnostics);
    }

    diagnostics
}

fn check_node(
    node: &Node,
    parent_id: Option<&str>,
    registry: &SchemaRegistry,
    seen_ids: &mut HashSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if !seen_ids.insert(node.id.clone()) {
        diagnostics.push(Diagnostic::error(
            "duplicate-id",
            format!("Id \"{}\" appears more than once in the document", node.id),
            &node.id,
        ));
    }

    if node.parent.as_deref() != parent_id {
        diagnostics.push(Diagnostic::warning(
            "parent-mismatch",
            format!(
                "Node \"{}\" carries a stale parent reference ({:?}, actual parent {:?})",
                node.id, node.parent, parent_id
            ),
            &node.id,
        ));
    }

    match registry.get(node.node_type) {
        None => {
            diagnostics.push(Diagnostic::error(
                "unknown-type",
                format!("Unknown component type \"{:?}\" at node {}", node.node_type, node.id),
                &node.id,
            ));
        }
        Some(def) => match &def.child_rule {
            None => {
                if !node.children.is_empty() {
                    diagnostics.push(Diagnostic::error(
                        "unexpected-children",
                        format!(
                            "Component \"{}\" of type {:?} should not have children",
                            node.id, node.node_type
                        ),
                        &node.id,
                    ));
                }
            }
            Some(rule) => {
                for child in &node.children {
                    if !rule.allow.contains(&child.node_type) {
                        diagnostics.push(Diagnostic::error(
                            "child-not-allowed",
                            format!(
                                "Child type {:?} is not allowed inside {:?} (parent node {})",
                                child.node_type, node.node_type, node.id
                            ),
                            &child.id,
                        ));
                    }
                }

                if let Some(min) = rule.min {
                    if node.children.len() < min {
                        diagnostics.push(
                            Diagnostic::error(
                                "min-children",
                                format!(
                                    "{:?} node {} requires at least {} child(ren), found {}",
                                    node.node_type,
                                    node.id,
                                    min,
                                    node.children.len()
                                ),
                                &node.id,
                            )
                            .with_suggestion(format!(
                                "Add a {:?} child",
                                rule.allow.first().copied().unwrap_or(node.node_type)
                            )),
                        );
                    }
                }

                if let Some(max) = rule.max {
                    if node.children.len() > max {
                        diagnostics.push(Diagnostic::error(
                            "max-children",
                            format!(
                                "{:?} node {} allows at most {} child(ren), found {}",
                                node.node_type,
                                node.id,
                                max,
                                node.children.len()
                            ),
                            &node.id,
                        ));
                    }
                }
            }
        },
    }

    for child in &node.children {
        check_node(child, Some(&node.id), registry, seen_ids, diagnostics);
    }
}
