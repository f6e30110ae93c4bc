use crate::document::{Document, LayoutConfig};
use crate::node::Node;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document export format version.
pub const DOCUMENT_VERSION: &str = "1.0.0";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported document version: {0}")]
    UnsupportedVersion(String),
}

/// JSON-serializable document envelope. Round-tripping through
/// serialize → deserialize reproduces an identical tree, id-for-id and
/// order-for-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub name: String,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl FormDocument {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            metadata: DocumentMetadata {
                document_id: doc.id.clone(),
                name: doc.name.clone(),
                layout: doc.layout,
            },
            nodes: doc.nodes.clone(),
        }
    }

    pub fn into_document(self) -> Document {
        Document {
            id: self.metadata.document_id,
            name: self.metadata.name,
            nodes: self.nodes,
            layout: self.metadata.layout,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self, ExportError> {
        let doc: FormDocument = serde_json::from_str(data)?;
        if doc.version != DOCUMENT_VERSION {
            return Err(ExportError::UnsupportedVersion(doc.version));
        }
        Ok(doc)
    }
}
