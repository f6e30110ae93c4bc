use serde::{Deserialize, Serialize};

/// Closed set of node kinds a form document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    // Layout
    Container,
    Form,
    Tabs,
    TabItem,

    // Form controls
    Input,
    Textarea,
    Select,
    Checkbox,
    Button,

    // Display
    Text,
    Image,
    Header,
}

/// Category partition: layout nodes own children, the rest are leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Layout,
    FormControl,
    Display,
}

impl NodeType {
    /// Every node type, in palette order.
    pub const ALL: [NodeType; 12] = [
        NodeType::Container,
        NodeType::Form,
        NodeType::Tabs,
        NodeType::TabItem,
        NodeType::Input,
        NodeType::Textarea,
        NodeType::Select,
        NodeType::Checkbox,
        NodeType::Button,
        NodeType::Text,
        NodeType::Image,
        NodeType::Header,
    ];

    pub fn category(self) -> Category {
        match self {
            NodeType::Container | NodeType::Form | NodeType::Tabs | NodeType::TabItem => {
                Category::Layout
            }
            NodeType::Input
            | NodeType::Textarea
            | NodeType::Select
            | NodeType::Checkbox
            | NodeType::Button => Category::FormControl,
            NodeType::Text | NodeType::Image | NodeType::Header => Category::Display,
        }
    }

    /// Layout-category nodes are the only ones that may own children.
    pub fn is_layout(self) -> bool {
        self.category() == Category::Layout
    }
}
