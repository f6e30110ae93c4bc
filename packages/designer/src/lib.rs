//! # FormCraft Designer
//!
//! The interactive editing layer: converts a stream of pointer-over events
//! during a drag gesture into a single committed structural edit.
//!
//! ## Data flow
//!
//! ```text
//! palette press / node press
//!         ↓
//! DragSession::begin (Idle → Active)
//!         ↓
//! pointer moves → resolve_target(zones) → candidate (cached, deduped)
//!         ↓
//! release → DesignerSession::commit_drag → exactly one Mutation
//!         ↓
//! Document replaced; session back to Idle
//! ```
//!
//! Rendering is an external collaborator: it supplies drop-zone geometry and
//! receives the candidate for placeholder feedback, but all structural
//! changes flow back through the `DesignerSession` request callbacks.

mod drag;
mod geometry;
mod session;
mod zones;

pub use drag::{DragPayload, DragSession};
pub use geometry::{Point, Rect};
pub use session::DesignerSession;
pub use zones::{resolve_target, DropCandidate, DropZone, ZoneKind};
