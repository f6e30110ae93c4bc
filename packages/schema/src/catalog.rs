use crate::node_type::NodeType;
use crate::registry::{NodeDef, SchemaRegistry};
use serde::Serialize;
use std::collections::BTreeMap;

/// Catalog schema version. Bumped when the catalog shape changes.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Read-only export of the registry, consumed by property-editing and
/// documentation tooling.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaCatalog {
    pub version: String,
    pub components: BTreeMap<NodeType, NodeDef>,
}

impl SchemaRegistry {
    pub fn catalog(&self) -> SchemaCatalog {
        SchemaCatalog {
            version: SCHEMA_VERSION.to_string(),
            components: self.defs().map(|def| (def.node_type, def.clone())).collect(),
        }
    }
}
