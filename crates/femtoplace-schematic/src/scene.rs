//! Scene items: the obstacle snapshot handed to the autoplacement engine.

use crate::geometry::{BoundingBox, Point};

/// Any drawable entity on the sheet other than the symbol being placed and
/// its own fields. The set of kinds the engine distinguishes is small and
/// fixed, so a closed sum type stands in for runtime type dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneItem {
    /// Another symbol, bounded by its body plus its visible fields.
    Symbol { bounds: BoundingBox },
    /// A connector line between two endpoints.
    Wire { start: Point, end: Point },
    /// A free-standing text label.
    FieldText { bounds: BoundingBox },
    /// Anything else that occupies sheet area.
    Generic { bounds: BoundingBox },
}

impl SceneItem {
    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            SceneItem::Symbol { bounds } => bounds,
            SceneItem::Wire { start, end } => BoundingBox::from_corners(start, end),
            SceneItem::FieldText { bounds } => bounds,
            SceneItem::Generic { bounds } => bounds,
        }
    }

    /// The y coordinate of a perfectly horizontal wire, if that is what this
    /// item is.
    pub fn as_horizontal_wire(&self) -> Option<i32> {
        match *self {
            SceneItem::Wire { start, end } if start.y == end.y => Some(start.y),
            _ => None,
        }
    }
}
