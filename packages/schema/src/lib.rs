//! # FormCraft Schema
//!
//! Static, per-node-type definitions for the form builder: the closed set of
//! node types, their categories, default attributes, attribute descriptors,
//! and child-nesting rules.
//!
//! The registry is pure data with no mutable state. The document model and
//! mutation engine consume it for defaults; the validator consumes it for
//! structural rules; property-editing collaborators consume the exported
//! catalog to know which fields to show per node type.

mod attributes;
mod catalog;
mod node_type;
mod registry;

pub use attributes::{AttrValue, Attributes, SelectOption, StyleMap};
pub use catalog::{SchemaCatalog, SCHEMA_VERSION};
pub use node_type::{Category, NodeType};
pub use registry::{AttrDescriptor, AttrKind, ChildRule, NodeDef, SchemaRegistry};
