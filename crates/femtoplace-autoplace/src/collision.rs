//! Collision scanning of candidate field boxes against the scene.

use crate::side::Side;
use femtoplace_schematic::{BoundingBox, SceneItem};

/// Why a candidate side is not cleanly usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Nothing intersects the candidate box.
    None,
    /// At least one obstacle that is not a horizontal wire row.
    Objects,
    /// Every intersecting item is a perfectly horizontal wire, and the
    /// candidate side stacks fields above or below the body.
    HorizontalWireRows,
}

/// Scans a snapshot of scene items. The snapshot must already exclude the
/// symbol being placed and its own fields.
pub(crate) struct CollisionScanner<'a> {
    items: &'a [SceneItem],
}

impl<'a> CollisionScanner<'a> {
    pub fn new(items: &'a [SceneItem]) -> Self {
        Self { items }
    }

    /// Every scene item whose bounds overlap the candidate box.
    pub fn colliders(&self, fbox: &BoundingBox) -> Vec<&'a SceneItem> {
        self.items
            .iter()
            .filter(|item| item.bounding_box().intersects(fbox))
            .collect()
    }

    pub fn classify(&self, fbox: &BoundingBox, side: Side) -> Collision {
        let hits = self.colliders(fbox);

        if hits.is_empty() {
            return Collision::None;
        }

        let wires_only = hits.iter().all(|item| item.as_horizontal_wire().is_some());
        if wires_only && matches!(side, Side::Top | Side::Bottom) {
            Collision::HorizontalWireRows
        } else {
            Collision::Objects
        }
    }
}
