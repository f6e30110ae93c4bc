use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Document-level grid defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub columns: u32,
    pub gap: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { columns: 1, gap: 16 }
    }
}

/// The form document: one root-level ordered sequence of nodes plus
/// metadata. Root-level nodes carry `parent = None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Location of a node within its containing sequence.
/// `parent_id = None` denotes the root sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub parent_id: Option<String>,
    pub index: usize,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            layout: LayoutConfig::default(),
        }
    }

    /// Depth-first lookup by id. Ids are unique, so the first match is the
    /// only match.
    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        find_in(&self.nodes, id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        find_in_mut(&mut self.nodes, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Locates the sequence containing `id` and its position within it.
    pub fn find_parent_and_index(&self, id: &str) -> Option<Placement> {
        find_placement(&self.nodes, id, None)
    }

    /// True if `candidate_id` appears anywhere under `ancestor_id`'s
    /// subtree. Used by the move operation as its cycle guard.
    pub fn is_descendant(&self, ancestor_id: &str, candidate_id: &str) -> bool {
        self.find_by_id(ancestor_id)
            .map(|ancestor| {
                ancestor
                    .children
                    .iter()
                    .any(|child| child.subtree_contains(candidate_id))
            })
            .unwrap_or(false)
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::subtree_size).sum()
    }
}

fn find_in<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_in_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_placement(nodes: &[Node], id: &str, parent_id: Option<&str>) -> Option<Placement> {
    for (index, node) in nodes.iter().enumerate() {
        if node.id == id {
            return Some(Placement {
                parent_id: parent_id.map(str::to_string),
                index,
            });
        }
        if let Some(found) = find_placement(&node.children, id, Some(&node.id)) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_schema::{Attributes, NodeType};

    fn node(id: &str, node_type: NodeType, parent: Option<&str>) -> Node {
        Node::new(id, node_type, Attributes::new(), parent.map(str::to_string))
    }

    fn sample() -> Document {
        // root: [container-a [form-b [input-c], header-d], button-e]
        let mut doc = Document::new("doc-1", "Sample");
        let mut a = node("a", NodeType::Container, None);
        let mut b = node("b", NodeType::Form, Some("a"));
        b.children.push(node("c", NodeType::Input, Some("b")));
        a.children.push(b);
        a.children.push(node("d", NodeType::Header, Some("a")));
        doc.nodes.push(a);
        doc.nodes.push(node("e", NodeType::Button, None));
        doc
    }

    #[test]
    fn test_find_by_id() {
        let doc = sample();
        assert_eq!(doc.find_by_id("c").unwrap().node_type, NodeType::Input);
        assert!(doc.find_by_id("zzz").is_none());
        assert_eq!(doc.node_count(), 5);
    }

    #[test]
    fn test_find_parent_and_index() {
        let doc = sample();
        let placement = doc.find_parent_and_index("d").unwrap();
        assert_eq!(placement.parent_id.as_deref(), Some("a"));
        assert_eq!(placement.index, 1);

        let root = doc.find_parent_and_index("e").unwrap();
        assert_eq!(root.parent_id, None);
        assert_eq!(root.index, 1);

        assert!(doc.find_parent_and_index("zzz").is_none());
    }

    #[test]
    fn test_is_descendant() {
        let doc = sample();
        assert!(doc.is_descendant("a", "c"));
        assert!(doc.is_descendant("b", "c"));
        assert!(!doc.is_descendant("c", "a"));
        assert!(!doc.is_descendant("a", "e"));
        // A node is not its own descendant.
        assert!(!doc.is_descendant("a", "a"));
    }

    #[test]
    fn test_layout_defaults() {
        let doc: Document = serde_json::from_str(r#"{"id":"f","name":"F"}"#).unwrap();
        assert_eq!(doc.layout, LayoutConfig { columns: 1, gap: 16 });
        assert!(doc.nodes.is_empty());
    }
}
