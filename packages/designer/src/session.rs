//! # Designer Session
//!
//! The explicit mutable session object owned by the host application: one
//! document, one drag session, one selection. UI reactivity is an external
//! concern; hosts observe the document snapshot after each call.

use crate::drag::{DragPayload, DragSession};
use crate::geometry::{Point, Rect};
use crate::zones::{DropCandidate, DropZone};
use formcraft_document::{
    Attributes, Document, DropMode, FormDocument, IdGenerator, Mutation, MutationOutcome,
    NodeType, SchemaRegistry,
};
use formcraft_validator::{validate_document, Diagnostic, ValidateOptions};
use tracing::debug;

/// Single edit session over one in-memory document.
pub struct DesignerSession {
    document: Document,
    ids: IdGenerator,
    registry: SchemaRegistry,
    drag: DragSession,

    /// Increments on each applied mutation.
    version: u64,

    /// Currently selected node (drives the property panel).
    selection: Option<String>,
}

impl DesignerSession {
    /// Create a session over a fresh, empty document.
    pub fn new(document_id: impl Into<String>, name: impl Into<String>) -> Self {
        let document = Document::new(document_id, name);
        let ids = IdGenerator::new(&document.id);
        Self {
            document,
            ids,
            registry: SchemaRegistry::new(),
            drag: DragSession::new(),
            version: 0,
            selection: None,
        }
    }

    /// Hydrate a session from a previously exported document.
    pub fn from_document(document: Document) -> Self {
        let ids = IdGenerator::new(&document.id);
        Self {
            document,
            ids,
            registry: SchemaRegistry::new(),
            drag: DragSession::new(),
            version: 0,
            selection: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn select(&mut self, node_id: Option<String>) {
        self.selection = node_id.filter(|id| self.document.contains(id));
    }

    // ---- Rendering-collaborator callbacks ------------------------------

    /// Insert a new node; returns its id when applied. The new node becomes
    /// the selection.
    pub fn request_insert(
        &mut self,
        node_type: NodeType,
        parent_id: Option<String>,
        index: Option<usize>,
    ) -> Option<String> {
        let outcome = self.apply(Mutation::Insert {
            node_type,
            parent_id,
            index,
        });
        if let Some(id) = &outcome.new_node_id {
            self.selection = Some(id.clone());
        }
        outcome.new_node_id
    }

    pub fn request_remove(&mut self, node_id: &str) -> bool {
        let outcome = self.apply(Mutation::Remove {
            node_id: node_id.to_string(),
        });
        if outcome.applied && self.selection.as_deref() == Some(node_id) {
            self.selection = None;
        }
        outcome.applied
    }

    pub fn request_patch(&mut self, node_id: &str, updates: Attributes) -> bool {
        self.apply(Mutation::Patch {
            node_id: node_id.to_string(),
            updates,
        })
        .applied
    }

    /// Move a node; the moved node becomes the selection when applied.
    pub fn request_move(
        &mut self,
        node_id: &str,
        target_id: Option<String>,
        mode: DropMode,
        index: Option<usize>,
    ) -> bool {
        let outcome = self.apply(Mutation::Move {
            node_id: node_id.to_string(),
            target_id,
            mode,
            index,
        });
        if outcome.applied {
            self.selection = Some(node_id.to_string());
        }
        outcome.applied
    }

    // ---- Drag lifecycle ------------------------------------------------

    pub fn begin_drag(&mut self, payload: DragPayload) {
        self.drag.begin(payload);
    }

    pub fn drag_active(&self) -> bool {
        self.drag.is_active()
    }

    pub fn drag_candidate(&self) -> Option<&DropCandidate> {
        self.drag.candidate()
    }

    /// Feed a pointer-over update into the active drag. Returns the new
    /// candidate only when it changed.
    pub fn drag_over(
        &mut self,
        zones: &[DropZone],
        pointer: Point,
        drag_rect: Option<Rect>,
    ) -> Option<DropCandidate> {
        self.drag
            .update_pointer(&self.document, zones, pointer, drag_rect)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Release the pointer: commit exactly one structural edit, or abandon
    /// the gesture when no candidate is held.
    pub fn commit_drag(&mut self) -> Option<MutationOutcome> {
        let (payload, candidate) = self.drag.finish()?;
        debug!(?payload, ?candidate, "committing drag");

        match payload {
            DragPayload::New { node_type } => {
                let outcome = self.apply(Mutation::Insert {
                    node_type,
                    parent_id: candidate.parent_id,
                    index: Some(candidate.index),
                });
                if let Some(id) = &outcome.new_node_id {
                    self.selection = Some(id.clone());
                }
                Some(outcome)
            }
            DragPayload::Reorder { node_id } => {
                let outcome = self.apply(Mutation::Move {
                    node_id: node_id.clone(),
                    target_id: candidate.target_id,
                    mode: candidate.mode,
                    index: None,
                });
                if outcome.applied {
                    self.selection = Some(node_id);
                }
                Some(outcome)
            }
        }
    }

    // ---- Export --------------------------------------------------------

    pub fn export(&self) -> FormDocument {
        FormDocument::from_document(&self.document)
    }

    /// Validate and export. Violations block the export, never editing.
    pub fn finalize(&self) -> Result<FormDocument, Vec<Diagnostic>> {
        let diagnostics = validate_document(
            &self.document,
            ValidateOptions {
                registry: Some(self.registry.clone()),
            },
        );
        if diagnostics.is_empty() {
            Ok(self.export())
        } else {
            Err(diagnostics)
        }
    }

    pub fn validate(&self) -> Vec<Diagnostic> {
        validate_document(
            &self.document,
            ValidateOptions {
                registry: Some(self.registry.clone()),
            },
        )
    }

    fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let outcome = mutation.apply(&mut self.document, &mut self.ids, &self.registry);
        if outcome.applied {
            self.version += 1;
        }
        outcome
    }
}
