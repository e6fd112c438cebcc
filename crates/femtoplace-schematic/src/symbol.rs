//! Symbols, their pins, and their text fields.

use crate::geometry::{BoundingBox, Point, Size};
use crate::transform::{Orientation, Transform};
use serde::{Deserialize, Serialize};

/// The direction a pin points in symbol-local space, toward the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PinDirection {
    pub fn vector(self) -> (i32, i32) {
        match self {
            PinDirection::Up => (0, -1),
            PinDirection::Down => (0, 1),
            PinDirection::Left => (-1, 0),
            PinDirection::Right => (1, 0),
        }
    }
}

/// A connection terminal on a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub number: String,
    /// Endpoint in symbol-local coordinates.
    pub position: Point,
    pub direction: PinDirection,
    pub visible: bool,
}

/// Horizontal text anchor alignment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizJustify {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizJustify {
    pub fn flipped(self) -> Self {
        match self {
            HorizJustify::Left => HorizJustify::Right,
            HorizJustify::Center => HorizJustify::Center,
            HorizJustify::Right => HorizJustify::Left,
        }
    }

    /// Whether this justification renders mirrored under the given symbol
    /// transform. Center never flips; Left/Right flip when the transform
    /// negates the x axis.
    pub fn rendered_flipped(self, transform: &Transform) -> bool {
        !matches!(self, HorizJustify::Center) && transform.x1 < 0
    }
}

/// Vertical text anchor alignment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertJustify {
    Top,
    #[default]
    Center,
    Bottom,
}

/// A movable text label attached to a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub text: String,
    /// Text anchor in absolute schematic coordinates.
    pub position: Point,
    /// Rendered text extents.
    pub size: Size,
    pub horiz_justify: HorizJustify,
    pub vert_justify: VertJustify,
    pub visible: bool,
}

impl Field {
    /// Fields with no text or hidden by the user take no part in placement.
    pub fn is_placeable(&self) -> bool {
        self.visible && !self.text.is_empty()
    }

    /// The rendered extents, anchored at `position` per justification.
    pub fn bounding_box(&self) -> BoundingBox {
        let x = match self.horiz_justify {
            HorizJustify::Left => self.position.x,
            HorizJustify::Center => self.position.x - self.size.width / 2,
            HorizJustify::Right => self.position.x - self.size.width,
        };
        let y = match self.vert_justify {
            VertJustify::Top => self.position.y,
            VertJustify::Center => self.position.y - self.size.height / 2,
            VertJustify::Bottom => self.position.y - self.size.height,
        };
        BoundingBox::new(x, y, self.size.width, self.size.height)
    }
}

/// A fixed-geometry schematic component with pins and text fields.
///
/// The body box and pin endpoints live in symbol-local coordinates and are
/// mapped to the sheet by `orientation` and `position`. Field positions are
/// absolute; the autoplacement engine overwrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub reference: String,
    /// Anchor on the sheet.
    pub position: Point,
    /// Body outline in symbol-local coordinates.
    pub body: BoundingBox,
    pub orientation: Orientation,
    pub pins: Vec<Pin>,
    pub fields: Vec<Field>,
    /// Symbols outside the electrical net (decorations, table frames) are
    /// never autoplaced.
    pub in_netlist: bool,
    /// Set by callers once the engine has placed this symbol's fields;
    /// cleared again when the user moves a field by hand.
    #[serde(default)]
    pub fields_autoplaced: bool,
}

impl Symbol {
    /// The body outline under the current orientation, in sheet coordinates.
    pub fn body_bounding_box(&self) -> BoundingBox {
        self.orientation
            .matrix()
            .transform_box(&self.body)
            .translated(self.position)
    }

    /// Body plus every visible field box. Other symbols contribute this full
    /// extent to collision scans, since their labels are obstacles too.
    pub fn full_bounding_box(&self) -> BoundingBox {
        let mut bbox = self.body_bounding_box();
        for field in &self.fields {
            if field.is_placeable() {
                bbox = bbox.union(&field.bounding_box());
            }
        }
        bbox
    }

    /// A pin's draw direction under the current orientation, as a unit
    /// vector in sheet coordinates.
    pub fn pin_draw_vector(&self, pin: &Pin) -> (i32, i32) {
        self.orientation.matrix().transform_vector(pin.direction.vector())
    }
}
