//! Symbol orientation as a 2x2 integer transform.
//!
//! The eight reachable orientations of a symbol (four rotations, each with an
//! optional mirror about the vertical axis) form a closed group. Each member
//! maps to a fixed integer matrix via a lookup table, and rotate/mirror
//! operations are matrix composition followed by a reverse lookup, so there
//! is no incremental transform state to accumulate drift or recursion.

use crate::geometry::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// A 2x2 integer transform matrix. A point `p` maps to
/// `(x1 * p.x + y1 * p.y, x2 * p.x + y2 * p.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { x1: 1, y1: 0, x2: 0, y2: 1 };

    /// One quarter turn counterclockwise on screen (y grows downward).
    pub const ROTATE_CCW: Transform = Transform { x1: 0, y1: 1, x2: -1, y2: 0 };

    pub const ROTATE_CW: Transform = Transform { x1: 0, y1: -1, x2: 1, y2: 0 };

    /// Mirror about the vertical axis (x negated).
    pub const MIRROR_H: Transform = Transform { x1: -1, y1: 0, x2: 0, y2: 1 };

    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.x1 * p.x + self.y1 * p.y,
            y: self.x2 * p.x + self.y2 * p.y,
        }
    }

    pub fn transform_vector(&self, v: (i32, i32)) -> (i32, i32) {
        (self.x1 * v.0 + self.y1 * v.1, self.x2 * v.0 + self.y2 * v.1)
    }

    /// Transform a box by mapping its corners and re-normalizing.
    pub fn transform_box(&self, bbox: &BoundingBox) -> BoundingBox {
        let a = self.transform_point(bbox.position);
        let b = self.transform_point(Point {
            x: bbox.right(),
            y: bbox.bottom(),
        });
        BoundingBox::from_corners(a, b)
    }

    /// Matrix product `self * first`: the transform that applies `first`,
    /// then `self`.
    pub fn compose(&self, first: &Transform) -> Transform {
        Transform {
            x1: self.x1 * first.x1 + self.y1 * first.x2,
            y1: self.x1 * first.y1 + self.y1 * first.y2,
            x2: self.x2 * first.x1 + self.y2 * first.x2,
            y2: self.x2 * first.y1 + self.y2 * first.y2,
        }
    }

    pub fn determinant(&self) -> i32 {
        self.x1 * self.y2 - self.y1 * self.x2
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

/// One of the eight dihedral orientations of a symbol. The mirror is about
/// the vertical axis and applies in symbol space before the rotation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: Rotation,
    #[serde(default)]
    pub mirrored: bool,
}

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation { rotation: Rotation::R0, mirrored: false },
        Orientation { rotation: Rotation::R90, mirrored: false },
        Orientation { rotation: Rotation::R180, mirrored: false },
        Orientation { rotation: Rotation::R270, mirrored: false },
        Orientation { rotation: Rotation::R0, mirrored: true },
        Orientation { rotation: Rotation::R90, mirrored: true },
        Orientation { rotation: Rotation::R180, mirrored: true },
        Orientation { rotation: Rotation::R270, mirrored: true },
    ];

    pub fn new(rotation: Rotation, mirrored: bool) -> Self {
        Self { rotation, mirrored }
    }

    pub fn matrix(self) -> Transform {
        let rot = match self.rotation {
            Rotation::R0 => Transform::IDENTITY,
            Rotation::R90 => Transform::ROTATE_CCW,
            Rotation::R180 => Transform { x1: -1, y1: 0, x2: 0, y2: -1 },
            Rotation::R270 => Transform::ROTATE_CW,
        };

        if self.mirrored {
            rot.compose(&Transform::MIRROR_H)
        } else {
            rot
        }
    }

    /// Reverse lookup from a matrix. Returns `None` for matrices outside the
    /// orientation group.
    pub fn from_matrix(m: Transform) -> Option<Orientation> {
        Orientation::ALL.into_iter().find(|o| o.matrix() == m)
    }

    fn apply(self, step: &Transform) -> Orientation {
        match Orientation::from_matrix(step.compose(&self.matrix())) {
            Some(orientation) => orientation,
            None => {
                debug_assert!(false, "orientation step left the dihedral group");
                self
            }
        }
    }

    pub fn rotated_ccw(self) -> Orientation {
        self.apply(&Transform::ROTATE_CCW)
    }

    pub fn rotated_cw(self) -> Orientation {
        self.apply(&Transform::ROTATE_CW)
    }

    /// Mirror the symbol about the vertical axis in screen space.
    pub fn mirrored_horizontally(self) -> Orientation {
        self.apply(&Transform::MIRROR_H)
    }
}
