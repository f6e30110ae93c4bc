//! Drag-session state machine.
//!
//! One gesture at a time: `Idle → Active → Idle`. While active, every
//! pointer update recomputes the candidate drop location; identical
//! successive candidates are not re-published so downstream consumers
//! (placeholder rendering) don't thrash. Release commits exactly one
//! structural edit, or abandons the gesture when no candidate exists.

use crate::geometry::{Point, Rect};
use crate::zones::{candidate_for_zone, resolve_target, DropCandidate, DropZone};
use formcraft_document::{Document, NodeType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What is being dragged: a palette item about to be created, or an
/// existing node being reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragPayload {
    New { node_type: NodeType },
    Reorder { node_id: String },
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Active {
        payload: DragPayload,
        candidate: Option<DropCandidate>,
    },
}

/// Tracks the lifecycle of one pointer-drag gesture.
#[derive(Debug, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active { .. })
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Active { payload, .. } => Some(payload),
            DragState::Idle => None,
        }
    }

    pub fn candidate(&self) -> Option<&DropCandidate> {
        match &self.state {
            DragState::Active { candidate, .. } => candidate.as_ref(),
            DragState::Idle => None,
        }
    }

    /// Start a gesture. An already-active session is restarted with the new
    /// payload.
    pub fn begin(&mut self, payload: DragPayload) {
        debug!(?payload, "drag started");
        self.state = DragState::Active {
            payload,
            candidate: None,
        };
    }

    /// Feed one pointer-over update. Returns the new candidate only when it
    /// differs from the cached one (same target id + mode = same candidate);
    /// `None` means "nothing changed" or "no target under pointer".
    pub fn update_pointer(
        &mut self,
        doc: &Document,
        zones: &[DropZone],
        pointer: Point,
        drag_rect: Option<Rect>,
    ) -> Option<DropCandidate> {
        let DragState::Active { candidate, .. } = &mut self.state else {
            return None;
        };

        let next = resolve_target(zones, pointer, drag_rect)
            .map(|zone| candidate_for_zone(doc, zone));

        let same_target = match (next.as_ref(), candidate.as_ref()) {
            (Some(a), Some(b)) => a.target_id == b.target_id && a.mode == b.mode,
            (None, None) => true,
            _ => false,
        };

        *candidate = next.clone();
        if same_target {
            None
        } else {
            debug!(?next, "drop candidate changed");
            next
        }
    }

    /// Abandon the gesture without committing.
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// End the gesture, yielding the payload and final candidate for the
    /// caller to commit. `None` candidate means the gesture is abandoned.
    pub fn finish(&mut self) -> Option<(DragPayload, DropCandidate)> {
        match std::mem::take(&mut self.state) {
            DragState::Active {
                payload,
                candidate: Some(candidate),
            } => Some((payload, candidate)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcraft_document::DropMode;

    fn zones() -> Vec<DropZone> {
        vec![
            DropZone::interior(None, Rect::new(0.0, 0.0, 800.0, 600.0)),
            DropZone::sibling("n-1", Rect::new(100.0, 100.0, 200.0, 80.0)),
        ]
    }

    fn doc() -> Document {
        Document::new("form_d", "Drag")
    }

    #[test]
    fn test_idle_ignores_pointer_updates() {
        let mut session = DragSession::new();
        let published = session.update_pointer(&doc(), &zones(), Point::new(10.0, 10.0), None);
        assert!(published.is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_candidate_published_once_per_target() {
        let mut session = DragSession::new();
        session.begin(DragPayload::New {
            node_type: NodeType::Input,
        });

        let doc = doc();
        let zones = zones();

        // First update over the canvas publishes.
        let first = session.update_pointer(&doc, &zones, Point::new(10.0, 10.0), None);
        assert!(first.is_some());
        assert_eq!(first.unwrap().mode, DropMode::After);

        // Subsequent identical targets are suppressed.
        let second = session.update_pointer(&doc, &zones, Point::new(20.0, 20.0), None);
        assert!(second.is_none());
        assert!(session.candidate().is_some());
    }

    #[test]
    fn test_leaving_canvas_clears_candidate() {
        let mut session = DragSession::new();
        session.begin(DragPayload::Reorder {
            node_id: "n-1".into(),
        });

        let doc = doc();
        let zones = zones();
        session.update_pointer(&doc, &zones, Point::new(10.0, 10.0), None);
        assert!(session.candidate().is_some());

        session.update_pointer(&doc, &zones, Point::new(5000.0, 5000.0), None);
        assert!(session.candidate().is_none());

        // Released over nothing: abandoned.
        assert!(session.finish().is_none());
        assert!(!session.is_active());
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut session = DragSession::new();
        session.begin(DragPayload::New {
            node_type: NodeType::Button,
        });
        session.update_pointer(&doc(), &zones(), Point::new(10.0, 10.0), None);

        session.cancel();
        assert!(!session.is_active());
        assert!(session.candidate().is_none());
    }

    #[test]
    fn test_finish_yields_payload_and_candidate() {
        let mut session = DragSession::new();
        session.begin(DragPayload::New {
            node_type: NodeType::Header,
        });
        session.update_pointer(&doc(), &zones(), Point::new(10.0, 10.0), None);

        let (payload, candidate) = session.finish().unwrap();
        assert_eq!(
            payload,
            DragPayload::New {
                node_type: NodeType::Header
            }
        );
        assert_eq!(candidate.parent_id, None);
        assert!(!session.is_active());
    }

    #[test]
    fn test_payload_serde_tags() {
        let json = serde_json::to_value(DragPayload::New {
            node_type: NodeType::Select,
        })
        .unwrap();
        assert_eq!(json["kind"], "new");
        assert_eq!(json["node_type"], "select");

        let reorder: DragPayload =
            serde_json::from_str(r#"{"kind":"reorder","node_id":"n-9"}"#).unwrap();
        assert_eq!(
            reorder,
            DragPayload::Reorder {
                node_id: "n-9".into()
            }
        );
    }
}
