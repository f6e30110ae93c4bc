use formcraft_schema::{Attributes, NodeType};
use serde::{Deserialize, Serialize};

/// Single element of the document tree.
///
/// Ownership lives in `children`; `parent` is a non-owning back-reference
/// kept in sync by the mutation engine and used for O(1) "who is my parent"
/// queries. `id` and `type` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub parent: Option<String>,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        node_type: NodeType,
        attributes: Attributes,
        parent: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            node_type,
            attributes,
            children: Vec::new(),
            parent,
        }
    }

    /// Number of nodes in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_size).sum::<usize>()
    }

    /// True if `id` names this node or any descendant.
    pub fn subtree_contains(&self, id: &str) -> bool {
        self.id == id || self.children.iter().any(|child| child.subtree_contains(id))
    }
}
