//! # FormCraft Document
//!
//! The document tree core: a mutable, strictly-typed tree of form nodes that
//! stays structurally valid while being edited through discrete operations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: per-type defaults + nesting rules   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: tree model + mutation engine      │
//! │  - identity queries (find, parent, subtree) │
//! │  - total mutations (insert/remove/patch/    │
//! │    move) with safe fallbacks                │
//! │  - JSON export format with round-trip       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ designer / validator / storage              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Identity is stable**: a node's id is assigned at creation and never
//!    reused or mutated; every id appears exactly once in the tree.
//! 2. **Mutations are total**: invalid requests resolve to the safest
//!    well-defined behavior (no-op, or append at root) instead of erroring,
//!    so the editing surface stays available.
//! 3. **Readers see snapshots**: each mutation is applied atomically between
//!    input events; renderers never observe a partially-edited tree.

mod document;
mod export;
mod id_generator;
mod mutations;
mod node;

pub use document::{Document, LayoutConfig, Placement};
pub use export::{DocumentMetadata, ExportError, FormDocument, DOCUMENT_VERSION};
pub use id_generator::{document_seed, IdGenerator};
pub use mutations::{DropMode, Mutation, MutationOutcome};
pub use node::Node;

// Re-export the schema types the document API surfaces.
pub use formcraft_schema::{AttrValue, Attributes, NodeType, SchemaRegistry};
