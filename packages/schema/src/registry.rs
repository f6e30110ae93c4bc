use crate::attributes::{style, AttrValue, Attributes, SelectOption};
use crate::node_type::{Category, NodeType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Editing surface for one attribute, consumed by property-panel
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrDescriptor {
    pub name: String,
    pub label: String,
    pub kind: AttrKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<AttrValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<SelectOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrKind {
    String,
    Boolean,
    Number,
    Enum,
    Options,
    Style,
}

/// Which child types a layout node accepts, and in what cardinality.
/// Bounds are advisory: the validator checks them, the mutation engine
/// never blocks on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildRule {
    pub allow: Vec<NodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<usize>,
    pub description: String,
}

/// Complete definition of one node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
    pub node_type: NodeType,
    pub display_name: String,
    pub category: Category,
    pub description: String,
    pub default_attributes: Attributes,
    pub attributes: Vec<AttrDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_rule: Option<ChildRule>,
}

/// Static catalog of per-type defaults and nesting rules. Pure data.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    defs: BTreeMap<NodeType, NodeDef>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        let mut defs = BTreeMap::new();
        for def in [
            container_def(),
            form_def(),
            tabs_def(),
            tab_item_def(),
            input_def(),
            textarea_def(),
            select_def(),
            checkbox_def(),
            button_def(),
            text_def(),
            image_def(),
            header_def(),
        ] {
            defs.insert(def.node_type, def);
        }
        Self { defs }
    }

    pub fn get(&self, node_type: NodeType) -> Option<&NodeDef> {
        self.defs.get(&node_type)
    }

    pub fn defs(&self) -> impl Iterator<Item = &NodeDef> {
        self.defs.values()
    }

    /// Default attributes for a type; empty when the type is unregistered.
    pub fn default_attributes(&self, node_type: NodeType) -> Attributes {
        self.get(node_type)
            .map(|def| def.default_attributes.clone())
            .unwrap_or_default()
    }

    pub fn allows_child(&self, parent: NodeType, child: NodeType) -> bool {
        self.get(parent)
            .and_then(|def| def.child_rule.as_ref())
            .is_some_and(|rule| rule.allow.contains(&child))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn descriptor(
    name: &str,
    label: &str,
    kind: AttrKind,
    description: &str,
    default: Option<AttrValue>,
) -> AttrDescriptor {
    AttrDescriptor {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        description: description.to_string(),
        default,
        enum_values: Vec::new(),
    }
}

fn grid_descriptors(columns: u32, gap: u32, what: &str) -> Vec<AttrDescriptor> {
    vec![
        descriptor(
            "columns",
            "Grid Columns",
            AttrKind::Number,
            &format!("How many grid columns to render inside the {what}."),
            Some(AttrValue::from(columns)),
        ),
        descriptor(
            "gap",
            "Grid Gap",
            AttrKind::Number,
            "Spacing between grid items in pixels.",
            Some(AttrValue::from(gap)),
        ),
    ]
}

fn style_descriptor(what: &str, default: AttrValue) -> AttrDescriptor {
    descriptor(
        "style",
        "Style",
        AttrKind::Style,
        &format!("Inline style overrides for the {what}."),
        Some(default),
    )
}

fn container_def() -> NodeDef {
    let container_style = style(&[
        ("padding", "20px"),
        ("border-radius", "8px"),
        ("background-color", "#ffffff"),
        ("min-height", "100px"),
    ]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("columns".into(), AttrValue::from(1u32));
    default_attributes.insert("gap".into(), AttrValue::from(16u32));
    default_attributes.insert("style".into(), container_style.clone());

    let mut attributes = grid_descriptors(1, 16, "container");
    attributes.push(style_descriptor("container", container_style));

    NodeDef {
        node_type: NodeType::Container,
        display_name: "Container".into(),
        category: Category::Layout,
        description: "A generic layout wrapper that can host any other component in a grid."
            .into(),
        default_attributes,
        attributes,
        child_rule: Some(ChildRule {
            allow: NodeType::ALL.to_vec(),
            min: None,
            max: None,
            description: "A container can nest any other component type.".into(),
        }),
    }
}

fn form_def() -> NodeDef {
    let form_style = style(&[
        ("padding", "24px"),
        ("border", "1px solid #e2e8f0"),
        ("border-radius", "8px"),
        ("background-color", "#ffffff"),
        ("width", "100%"),
        ("min-height", "150px"),
    ]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("label".into(), AttrValue::from("My Form"));
    default_attributes.insert("columns".into(), AttrValue::from(1u32));
    default_attributes.insert("gap".into(), AttrValue::from(16u32));
    default_attributes.insert("style".into(), form_style.clone());

    let mut attributes = vec![descriptor(
        "label",
        "Form Title",
        AttrKind::String,
        "Title displayed at the top of the form.",
        Some(AttrValue::from("My Form")),
    )];
    attributes.extend(grid_descriptors(1, 16, "form"));
    attributes.push(style_descriptor("form wrapper", form_style));

    NodeDef {
        node_type: NodeType::Form,
        display_name: "Form".into(),
        category: Category::Layout,
        description: "A form container with its own grid configuration and header label.".into(),
        default_attributes,
        attributes,
        child_rule: Some(ChildRule {
            allow: NodeType::ALL.to_vec(),
            min: None,
            max: None,
            description: "Forms can host any component; typically inputs and layout items."
                .into(),
        }),
    }
}

fn tabs_def() -> NodeDef {
    let tabs_style = style(&[
        ("width", "100%"),
        ("background-color", "#ffffff"),
        ("border-radius", "8px"),
        ("border", "1px solid #e2e8f0"),
    ]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("style".into(), tabs_style.clone());

    NodeDef {
        node_type: NodeType::Tabs,
        display_name: "Tabs".into(),
        category: Category::Layout,
        description: "A tab set that owns a list of tab items as children.".into(),
        default_attributes,
        attributes: vec![style_descriptor("tabs wrapper", tabs_style)],
        child_rule: Some(ChildRule {
            allow: vec![NodeType::TabItem],
            min: Some(1),
            max: None,
            description: "Tabs can only contain tab_item components.".into(),
        }),
    }
}

fn tab_item_def() -> NodeDef {
    let tab_style = style(&[("padding", "20px"), ("min-height", "100px")]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("label".into(), AttrValue::from("Tab"));
    default_attributes.insert("columns".into(), AttrValue::from(1u32));
    default_attributes.insert("gap".into(), AttrValue::from(16u32));
    default_attributes.insert("style".into(), tab_style.clone());

    let mut attributes = vec![descriptor(
        "label",
        "Tab Label",
        AttrKind::String,
        "Displayed text for the tab trigger.",
        Some(AttrValue::from("Tab")),
    )];
    attributes.extend(grid_descriptors(1, 16, "tab content"));
    attributes.push(style_descriptor("tab content area", tab_style));

    NodeDef {
        node_type: NodeType::TabItem,
        display_name: "Tab Item".into(),
        category: Category::Layout,
        description: "Content pane for a Tabs component.".into(),
        default_attributes,
        attributes,
        child_rule: Some(ChildRule {
            allow: NodeType::ALL.to_vec(),
            min: None,
            max: None,
            description: "Tab items can host any other component.".into(),
        }),
    }
}

fn input_def() -> NodeDef {
    let mut default_attributes = Attributes::new();
    default_attributes.insert("label".into(), AttrValue::from("Text Input"));
    default_attributes.insert("placeholder".into(), AttrValue::from("Enter text here..."));
    default_attributes.insert("required".into(), AttrValue::from(false));

    NodeDef {
        node_type: NodeType::Input,
        display_name: "Input".into(),
        category: Category::FormControl,
        description: "Single line text input.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "label",
                "Label",
                AttrKind::String,
                "Field label displayed above the input.",
                Some(AttrValue::from("Text Input")),
            ),
            descriptor(
                "placeholder",
                "Placeholder",
                AttrKind::String,
                "Hint text shown when the input is empty.",
                Some(AttrValue::from("Enter text here...")),
            ),
            descriptor(
                "required",
                "Required",
                AttrKind::Boolean,
                "Whether this input must be filled.",
                Some(AttrValue::from(false)),
            ),
        ],
        child_rule: None,
    }
}

fn textarea_def() -> NodeDef {
    let mut default_attributes = Attributes::new();
    default_attributes.insert("label".into(), AttrValue::from("Text Area"));
    default_attributes.insert(
        "placeholder".into(),
        AttrValue::from("Enter long text here..."),
    );
    default_attributes.insert("required".into(), AttrValue::from(false));

    NodeDef {
        node_type: NodeType::Textarea,
        display_name: "Text Area".into(),
        category: Category::FormControl,
        description: "Multi-line text input.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "label",
                "Label",
                AttrKind::String,
                "Field label displayed above the textarea.",
                Some(AttrValue::from("Text Area")),
            ),
            descriptor(
                "placeholder",
                "Placeholder",
                AttrKind::String,
                "Hint text shown when the textarea is empty.",
                Some(AttrValue::from("Enter long text here...")),
            ),
            descriptor(
                "required",
                "Required",
                AttrKind::Boolean,
                "Whether this textarea must be filled.",
                Some(AttrValue::from(false)),
            ),
        ],
        child_rule: None,
    }
}

fn select_def() -> NodeDef {
    let default_options = vec![
        SelectOption::new("Option 1", "1"),
        SelectOption::new("Option 2", "2"),
        SelectOption::new("Option 3", "3"),
    ];
    let mut default_attributes = Attributes::new();
    default_attributes.insert("label".into(), AttrValue::from("Dropdown"));
    default_attributes.insert("required".into(), AttrValue::from(false));
    default_attributes.insert("options".into(), AttrValue::from(default_options.clone()));

    NodeDef {
        node_type: NodeType::Select,
        display_name: "Select".into(),
        category: Category::FormControl,
        description: "Single select dropdown with label and options.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "label",
                "Label",
                AttrKind::String,
                "Field label displayed above the select.",
                Some(AttrValue::from("Dropdown")),
            ),
            descriptor(
                "required",
                "Required",
                AttrKind::Boolean,
                "Whether this field must be selected.",
                Some(AttrValue::from(false)),
            ),
            descriptor(
                "options",
                "Options",
                AttrKind::Options,
                "List of selectable options with label/value.",
                Some(AttrValue::from(default_options)),
            ),
        ],
        child_rule: None,
    }
}

fn checkbox_def() -> NodeDef {
    let mut default_attributes = Attributes::new();
    default_attributes.insert("label".into(), AttrValue::from("Checkbox"));
    default_attributes.insert("required".into(), AttrValue::from(false));
    default_attributes.insert("content".into(), AttrValue::from("I agree to terms"));

    NodeDef {
        node_type: NodeType::Checkbox,
        display_name: "Checkbox".into(),
        category: Category::FormControl,
        description: "Checkbox input with an optional helper description.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "label",
                "Label",
                AttrKind::String,
                "Field label rendered next to the checkbox.",
                Some(AttrValue::from("Checkbox")),
            ),
            descriptor(
                "content",
                "Description",
                AttrKind::String,
                "Helper text displayed under the label.",
                Some(AttrValue::from("I agree to terms")),
            ),
            descriptor(
                "required",
                "Required",
                AttrKind::Boolean,
                "Whether the checkbox must be checked.",
                Some(AttrValue::from(false)),
            ),
        ],
        child_rule: None,
    }
}

fn button_def() -> NodeDef {
    let button_style = style(&[
        ("background-color", "#3b82f6"),
        ("color", "white"),
        ("padding", "8px 16px"),
        ("border-radius", "4px"),
    ]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("content".into(), AttrValue::from("Submit"));
    default_attributes.insert("buttonType".into(), AttrValue::from("submit"));
    default_attributes.insert("style".into(), button_style.clone());

    let mut button_type = descriptor(
        "buttonType",
        "Button Type",
        AttrKind::Enum,
        "The native button type attribute.",
        Some(AttrValue::from("submit")),
    );
    button_type.enum_values = vec![
        SelectOption::new("Submit", "submit"),
        SelectOption::new("Button", "button"),
        SelectOption::new("Reset", "reset"),
    ];

    NodeDef {
        node_type: NodeType::Button,
        display_name: "Button".into(),
        category: Category::FormControl,
        description: "Form button that can submit, reset, or act as a plain action trigger."
            .into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "content",
                "Label",
                AttrKind::String,
                "Text shown inside the button.",
                Some(AttrValue::from("Submit")),
            ),
            button_type,
            style_descriptor("button", button_style),
        ],
        child_rule: None,
    }
}

fn text_def() -> NodeDef {
    let text_style = style(&[("color", "#64748b"), ("font-size", "14px")]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert(
        "content".into(),
        AttrValue::from("This is a text block. You can edit this content."),
    );
    default_attributes.insert("style".into(), text_style.clone());

    NodeDef {
        node_type: NodeType::Text,
        display_name: "Text".into(),
        category: Category::Display,
        description: "Simple text element for descriptive copy.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "content",
                "Text Content",
                AttrKind::String,
                "Displayed paragraph text.",
                Some(AttrValue::from(
                    "This is a text block. You can edit this content.",
                )),
            ),
            style_descriptor("text node", text_style),
        ],
        child_rule: None,
    }
}

fn image_def() -> NodeDef {
    let image_style = style(&[
        ("border-radius", "8px"),
        ("width", "100%"),
        ("height", "auto"),
        ("object-fit", "cover"),
    ]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("src".into(), AttrValue::from("https://picsum.photos/400/200"));
    default_attributes.insert("alt".into(), AttrValue::from("Placeholder Image"));
    default_attributes.insert("style".into(), image_style.clone());

    NodeDef {
        node_type: NodeType::Image,
        display_name: "Image".into(),
        category: Category::Display,
        description: "Responsive image with optional alt text.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "src",
                "Source URL",
                AttrKind::String,
                "Image source address.",
                Some(AttrValue::from("https://picsum.photos/400/200")),
            ),
            descriptor(
                "alt",
                "Alt Text",
                AttrKind::String,
                "Accessible description for the image.",
                Some(AttrValue::from("Placeholder Image")),
            ),
            style_descriptor("image", image_style),
        ],
        child_rule: None,
    }
}

fn header_def() -> NodeDef {
    let header_style = style(&[
        ("font-size", "24px"),
        ("font-weight", "bold"),
        ("color", "#1e293b"),
    ]);
    let mut default_attributes = Attributes::new();
    default_attributes.insert("content".into(), AttrValue::from("Form Header"));
    default_attributes.insert("style".into(), header_style.clone());

    NodeDef {
        node_type: NodeType::Header,
        display_name: "Header".into(),
        category: Category::Display,
        description: "Section heading text.".into(),
        default_attributes,
        attributes: vec![
            descriptor(
                "content",
                "Heading Text",
                AttrKind::String,
                "Displayed heading string.",
                Some(AttrValue::from("Form Header")),
            ),
            style_descriptor("heading", header_style),
        ],
        child_rule: None,
    }
}
