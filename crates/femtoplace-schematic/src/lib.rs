//! Schematic data model for femtoplace.
//!
//! This crate holds the read side of the femtoplace architecture: integer
//! geometry primitives, the symbol orientation group, symbols with their pins
//! and text fields, and the scene-item snapshot consumed by the autoplacement
//! engine. The structures are serialisable with `serde` so that schematic
//! documents can be stored and transferred as JSON.
//!
//! Coordinates are `i32` schematic units (mils) with y growing downward.

pub mod document;
pub mod geometry;
pub mod scene;
pub mod symbol;
pub mod transform;

pub use document::{DocumentError, SchematicDocument, WireSegment};
pub use geometry::{BoundingBox, Point, Size};
pub use scene::SceneItem;
pub use symbol::{Field, HorizJustify, Pin, PinDirection, Symbol, VertJustify};
pub use transform::{Orientation, Rotation, Transform};
