//! # femtoplace-autoplace
//!
//! The deterministic field autoplacement engine for femtoplace. Given one
//! symbol and, in manual mode, a snapshot of the surrounding scene, it picks
//! the side of the body the text fields stack on, computes each field's
//! anchor and justification, and writes them back in place.
//!
//! The pipeline is a single linear pass per invocation: classify pins to
//! sides, rank the candidate sides, select one (scanning the scene for
//! collisions in manual mode), place the field box, optionally slide it
//! between horizontal wire rows, then justify and grid-align every field.
//! One invocation processes exactly one symbol to completion; it performs no
//! I/O and keeps no state between runs.

use femtoplace_schematic::{
    BoundingBox, HorizJustify, Point, SceneItem, Symbol, VertJustify,
};
use log::debug;

mod collision;
mod fieldbox;
mod side;

pub use collision::Collision;
pub use side::Side;

use collision::CollisionScanner;
use fieldbox::{field_box_placement, field_box_size, fit_fields_between_wires, round_n};
use side::{choose_side_avoiding, choose_unobstructed, preferred_sides};

/// Gap between the body box and a left/right field box.
pub const HPADDING: i32 = 25;
/// Gap between the body box and a top/bottom field box.
pub const VPADDING: i32 = 25;
/// Vertical distance between stacked field anchors, which is also the
/// standard pitch of parallel wire rows.
pub const FIELD_ROW_SPACING: i32 = 100;
/// Default grid unit for aligned placement.
pub const DEFAULT_GRID_UNIT: i32 = 50;

/// How a placement run was triggered.
///
/// Manual runs carry the obstacle snapshot they scan, so a manual invocation
/// without one cannot be expressed. The snapshot must exclude the symbol
/// being placed and its own fields.
#[derive(Debug, Clone, Copy)]
pub enum PlacementMode<'a> {
    /// Fast path without a scene scan, used when symbols are first created.
    Automatic,
    /// Interactive placement: avoid collisions and fit between wire rows.
    Manual(&'a [SceneItem]),
}

/// Recognized placement options.
#[derive(Debug, Clone)]
pub struct AutoplaceConfig {
    /// Let the engine change each field's justification to match the chosen
    /// side.
    pub allow_rejustify: bool,
    /// Snap final field anchors to the grid, rounding outward from the body.
    pub align_to_grid: bool,
    /// Grid spacing in schematic units.
    pub grid_unit: i32,
}

impl Default for AutoplaceConfig {
    fn default() -> Self {
        Self {
            allow_rejustify: true,
            align_to_grid: false,
            grid_unit: DEFAULT_GRID_UNIT,
        }
    }
}

/// Place all of a symbol's visible, non-empty fields.
///
/// Updates each placed field's position and justification in place; hidden
/// and empty fields keep theirs. Symbols outside the electrical net are
/// skipped entirely.
pub fn place_fields(symbol: &mut Symbol, mode: PlacementMode<'_>, config: &AutoplaceConfig) {
    if !symbol.in_netlist {
        debug!("{}: not in netlist, skipping autoplace", symbol.reference);
        return;
    }

    let placeable: Vec<usize> = symbol
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_placeable())
        .map(|(index, _)| index)
        .collect();
    if placeable.is_empty() {
        return;
    }

    let body = symbol.body_bounding_box();
    let box_size = field_box_size(symbol);
    let ranked = preferred_sides(symbol);

    let scanner = match mode {
        PlacementMode::Manual(items) => Some(CollisionScanner::new(items)),
        PlacementMode::Automatic => None,
    };

    let side = match &scanner {
        Some(scanner) => choose_side_avoiding(scanner, &body, box_size, ranked),
        None => choose_unobstructed(&ranked),
    };
    debug!("{}: placing fields on {side:?}", symbol.reference);

    let mut fbox = BoundingBox::from_position_and_size(
        field_box_placement(&body, box_size, side),
        box_size,
    );
    if let Some(scanner) = &scanner {
        fbox.position = fit_fields_between_wires(scanner, &fbox, side);
    }

    let transform = symbol.orientation.matrix();
    for (row, &index) in placeable.iter().enumerate() {
        let field = &mut symbol.fields[index];

        if config.allow_rejustify {
            field.horiz_justify = match side {
                Side::Left => HorizJustify::Right,
                Side::Right => HorizJustify::Left,
                Side::Top | Side::Bottom => HorizJustify::Center,
            };
            // The flip state depends on the justification just assigned, so
            // it has to be queried after the first set.
            if field.horiz_justify.rendered_flipped(&transform) {
                field.horiz_justify = field.horiz_justify.flipped();
            }
            field.vert_justify = VertJustify::Center;
        }

        let effective = if field.horiz_justify.rendered_flipped(&transform) {
            field.horiz_justify.flipped()
        } else {
            field.horiz_justify
        };
        let mut x = match effective {
            HorizJustify::Left => fbox.left(),
            HorizJustify::Center => fbox.center().x,
            HorizJustify::Right => fbox.right(),
        };
        let mut y = fbox.top() + row as i32 * FIELD_ROW_SPACING;

        if config.align_to_grid {
            let (dx, dy) = side.unit_vector();
            x = round_n(x, config.grid_unit, dx >= 0);
            y = round_n(y, config.grid_unit, dy >= 0);
        }

        field.position = Point::new(x, y);
    }
}
