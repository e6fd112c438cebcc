//! Axis-aligned geometry primitives over integer schematic units.

use serde::{Deserialize, Serialize};

/// A 2D point in schematic space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size (width and height).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding box, anchored at its top-left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub position: Point,
    pub size: Size,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn from_position_and_size(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Build a box spanning two arbitrary corner points.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let left = a.x.min(b.x);
        let top = a.y.min(b.y);
        Self::new(left, top, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn left(&self) -> i32 {
        self.position.x
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.width
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.position.x + self.size.width / 2,
            y: self.position.y + self.size.height / 2,
        }
    }

    /// True when the interiors overlap. Boxes that merely share an edge do
    /// not intersect, so an item sitting exactly on a box border is clear.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Expand this bounding box to include another.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        BoundingBox::new(left, top, right - left, bottom - top)
    }

    pub fn translated(&self, by: Point) -> BoundingBox {
        BoundingBox::from_position_and_size(
            Point {
                x: self.position.x + by.x,
                y: self.position.y + by.y,
            },
            self.size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let bbox = BoundingBox::new(10, 20, 100, 40);
        assert_eq!(bbox.left(), 10);
        assert_eq!(bbox.right(), 110);
        assert_eq!(bbox.top(), 20);
        assert_eq!(bbox.bottom(), 60);
        assert_eq!(bbox.center(), Point::new(60, 40));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let bbox = BoundingBox::from_corners(Point::new(50, 80), Point::new(-10, 20));
        assert_eq!(bbox, BoundingBox::new(-10, 20, 60, 60));
    }

    #[test]
    fn test_overlap_intersects() {
        let a = BoundingBox::new(0, 0, 100, 100);
        let b = BoundingBox::new(50, 50, 100, 100);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = BoundingBox::new(0, 0, 100, 100);
        let b = BoundingBox::new(100, 0, 100, 100);
        assert!(!a.intersects(&b));

        let below = BoundingBox::new(0, 100, 100, 100);
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_degenerate_wire_box_intersects_interior() {
        // A horizontal wire is a zero-height box.
        let field_box = BoundingBox::new(0, 0, 200, 100);
        let wire = BoundingBox::new(-50, 50, 300, 0);
        assert!(field_box.intersects(&wire));

        let wire_on_edge = BoundingBox::new(-50, 100, 300, 0);
        assert!(!field_box.intersects(&wire_on_edge));
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(20, -5, 10, 10);
        assert_eq!(a.union(&b), BoundingBox::new(0, -5, 30, 15));
    }

    #[test]
    fn test_translated() {
        let bbox = BoundingBox::new(10, 10, 5, 5).translated(Point::new(-10, 40));
        assert_eq!(bbox, BoundingBox::new(0, 50, 5, 5));
    }
}
