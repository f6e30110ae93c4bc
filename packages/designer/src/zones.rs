//! Drop zones and target resolution.
//!
//! Two kinds of zones are hit-tested during a drag: *interior* zones
//! ("become a child of this container" — one per layout node, plus the
//! canvas root) and *sibling* zones (the bounding box of an existing node,
//! "insert immediately after me"). Interior zones take priority on exact
//! pointer containment because nesting intent is more specific than
//! reordering intent; otherwise the best bounding-box overlap wins.

use crate::geometry::{Point, Rect};
use formcraft_document::{Document, DropMode};
use serde::{Deserialize, Serialize};

/// A droppable region supplied by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropZone {
    pub kind: ZoneKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ZoneKind {
    /// Insert as a child of `node_id`; `None` is the canvas root.
    Interior { node_id: Option<String> },
    /// Insert immediately after `node_id` in its current parent.
    Sibling { node_id: String },
}

impl DropZone {
    pub fn interior(node_id: Option<String>, rect: Rect) -> Self {
        Self {
            kind: ZoneKind::Interior { node_id },
            rect,
        }
    }

    pub fn sibling(node_id: impl Into<String>, rect: Rect) -> Self {
        Self {
            kind: ZoneKind::Sibling {
                node_id: node_id.into(),
            },
            rect,
        }
    }

    fn is_interior(&self) -> bool {
        matches!(self.kind, ZoneKind::Interior { .. })
    }
}

/// The currently resolved drop location during an active drag.
///
/// `target_id` is the node the winning zone belongs to (the container for
/// `into`, the preceding sibling for `after`, `None` for the canvas root);
/// `parent_id`/`index` are the equivalent splice coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropCandidate {
    pub target_id: Option<String>,
    pub mode: DropMode,
    pub parent_id: Option<String>,
    pub index: usize,
}

/// Resolve the winning drop zone for the current pointer geometry.
///
/// 1. Among zones containing the exact pointer, any interior zone wins
///    unconditionally (smallest area first, so nested containers resolve
///    to the innermost).
/// 2. Otherwise the zone with the largest bounding-box overlap against the
///    dragged rect wins.
/// 3. No overlap at all: no target.
pub fn resolve_target<'a>(
    zones: &'a [DropZone],
    pointer: Point,
    drag_rect: Option<Rect>,
) -> Option<&'a DropZone> {
    let interior_hit = zones
        .iter()
        .filter(|zone| zone.is_interior() && zone.rect.contains(pointer))
        .min_by(|a, b| a.rect.area().total_cmp(&b.rect.area()));
    if let Some(zone) = interior_hit {
        return Some(zone);
    }

    // Pointer-sized probe when the caller has no overlay geometry.
    let probe = drag_rect.unwrap_or(Rect::new(pointer.x - 1.0, pointer.y - 1.0, 2.0, 2.0));

    zones
        .iter()
        .map(|zone| (zone, zone.rect.intersection_area(&probe)))
        .filter(|(_, area)| *area > 0.0)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(zone, _)| zone)
}

/// Translate a winning zone into splice coordinates against the current
/// tree.
pub(crate) fn candidate_for_zone(doc: &Document, zone: &DropZone) -> DropCandidate {
    match &zone.kind {
        ZoneKind::Interior { node_id: None } => root_append(doc),
        ZoneKind::Interior {
            node_id: Some(container),
        } => {
            let end = doc
                .find_by_id(container)
                .map(|node| node.children.len())
                .unwrap_or(0);
            DropCandidate {
                target_id: Some(container.clone()),
                mode: DropMode::Into,
                parent_id: Some(container.clone()),
                index: end,
            }
        }
        ZoneKind::Sibling { node_id } => match doc.find_parent_and_index(node_id) {
            Some(placement) => DropCandidate {
                target_id: Some(node_id.clone()),
                mode: DropMode::After,
                parent_id: placement.parent_id,
                index: placement.index + 1,
            },
            // Zone for a node that no longer exists; treat as canvas.
            None => root_append(doc),
        },
    }
}

fn root_append(doc: &Document) -> DropCandidate {
    DropCandidate {
        target_id: None,
        mode: DropMode::After,
        parent_id: None,
        index: doc.nodes.len(),
    }
}
