//! Field box sizing, per-side placement, and wire-row fitting.

use crate::collision::CollisionScanner;
use crate::side::Side;
use crate::{FIELD_ROW_SPACING, HPADDING, VPADDING};
use femtoplace_schematic::{BoundingBox, Point, Size, Symbol};
use log::trace;

/// The rectangle holding the stacked fields: as wide as the widest
/// placeable field, with one row of spacing per gap between fields.
pub(crate) fn field_box_size(symbol: &Symbol) -> Size {
    let mut max_width = 0;
    let mut count: i32 = 0;

    for field in symbol.fields.iter().filter(|field| field.is_placeable()) {
        max_width = max_width.max(field.size.width);
        count += 1;
    }

    Size::new(max_width, (count - 1).max(0) * FIELD_ROW_SPACING)
}

/// The field box origin for one candidate side. Left/right boxes center on
/// the body vertically; top/bottom boxes center on it horizontally.
pub(crate) fn field_box_placement(body: &BoundingBox, size: Size, side: Side) -> Point {
    match side {
        Side::Right => Point::new(
            body.right() + HPADDING,
            body.center().y - size.height / 2,
        ),
        Side::Left => Point::new(
            body.left() - size.width - HPADDING,
            body.center().y - size.height / 2,
        ),
        Side::Bottom => Point::new(
            body.left() + (body.width() - size.width) / 2,
            body.bottom() + VPADDING,
        ),
        Side::Top => Point::new(
            body.left() + (body.width() - size.width) / 2,
            body.top() - size.height - VPADDING,
        ),
    }
}

/// Round to a multiple of `n`, toward positive infinity when `round_up`.
pub(crate) fn round_n(value: i32, n: i32, round_up: bool) -> i32 {
    debug_assert!(n > 0);
    if round_up {
        (value + n - 1).div_euclid(n) * n
    } else {
        value.div_euclid(n) * n
    }
}

/// Shift a top/bottom field box so each field row sits centered between
/// horizontal wire rows instead of on one.
///
/// Applies only when every collider is a perfectly horizontal wire and all
/// wires agree on their offset within the row pitch; any other situation
/// returns the box origin unchanged rather than risk a worse position. The
/// shifted origin rounds away from the body so the box cannot land back on
/// it.
pub(crate) fn fit_fields_between_wires(
    scanner: &CollisionScanner<'_>,
    fbox: &BoundingBox,
    side: Side,
) -> Point {
    if !matches!(side, Side::Top | Side::Bottom) {
        return fbox.position;
    }

    let colliders = scanner.colliders(fbox);
    if colliders.is_empty() {
        return fbox.position;
    }

    let mut offset: Option<i32> = None;
    for item in colliders {
        let Some(wire_y) = item.as_horizontal_wire() else {
            trace!("non-wire collider; keeping field box at {:?}", fbox.position);
            return fbox.position;
        };

        let this_offset = 3 * FIELD_ROW_SPACING / 2 - wire_y.rem_euclid(FIELD_ROW_SPACING);
        match offset {
            None => offset = Some(this_offset),
            Some(seen)
                if seen.rem_euclid(FIELD_ROW_SPACING)
                    != this_offset.rem_euclid(FIELD_ROW_SPACING) =>
            {
                trace!("wires disagree on row offset; keeping field box");
                return fbox.position;
            }
            Some(_) => {}
        }
    }

    let Some(offset) = offset else {
        return fbox.position;
    };

    let round_up = side == Side::Bottom;
    Point::new(
        fbox.position.x,
        round_n(fbox.position.y - offset, FIELD_ROW_SPACING, round_up) + offset,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use femtoplace_schematic::{
        Field, HorizJustify, Orientation, SceneItem, VertJustify,
    };

    fn field(text: &str, width: i32, visible: bool) -> Field {
        Field {
            name: text.to_string(),
            text: text.to_string(),
            position: Point::new(0, 0),
            size: Size::new(width, 50),
            horiz_justify: HorizJustify::Left,
            vert_justify: VertJustify::Center,
            visible,
        }
    }

    fn symbol_with_fields(fields: Vec<Field>) -> Symbol {
        Symbol {
            reference: "U1".to_string(),
            position: Point::new(0, 0),
            body: BoundingBox::new(0, 0, 200, 200),
            orientation: Orientation::default(),
            pins: Vec::new(),
            fields,
            in_netlist: true,
            fields_autoplaced: false,
        }
    }

    #[test]
    fn test_box_size_spans_placeable_fields_only() {
        let symbol = symbol_with_fields(vec![
            field("R1", 80, true),
            field("10k", 60, true),
            field("hidden", 500, false),
        ]);

        assert_eq!(field_box_size(&symbol), Size::new(80, FIELD_ROW_SPACING));
    }

    #[test]
    fn test_single_field_box_has_zero_height() {
        let symbol = symbol_with_fields(vec![field("R1", 80, true)]);
        assert_eq!(field_box_size(&symbol), Size::new(80, 0));
    }

    #[test]
    fn test_placement_per_side() {
        let body = BoundingBox::new(0, 0, 200, 200);
        let size = Size::new(80, 100);

        assert_eq!(
            field_box_placement(&body, size, Side::Right),
            Point::new(200 + HPADDING, 50)
        );
        assert_eq!(
            field_box_placement(&body, size, Side::Left),
            Point::new(-80 - HPADDING, 50)
        );
        assert_eq!(
            field_box_placement(&body, size, Side::Bottom),
            Point::new(60, 200 + VPADDING)
        );
        assert_eq!(
            field_box_placement(&body, size, Side::Top),
            Point::new(60, -100 - VPADDING)
        );
    }

    #[test]
    fn test_round_n_handles_negatives() {
        assert_eq!(round_n(125, 50, false), 100);
        assert_eq!(round_n(125, 50, true), 150);
        assert_eq!(round_n(-125, 50, false), -150);
        assert_eq!(round_n(-125, 50, true), -100);
        assert_eq!(round_n(-100, 50, true), -100);
        assert_eq!(round_n(0, 50, false), 0);
    }

    fn wire(y: i32) -> SceneItem {
        SceneItem::Wire {
            start: Point::new(-500, y),
            end: Point::new(500, y),
        }
    }

    #[test]
    fn test_fit_leaves_left_right_boxes_alone() {
        let scene = [wire(50)];
        let scanner = CollisionScanner::new(&scene);
        let fbox = BoundingBox::new(0, 0, 100, 100);

        assert_eq!(
            fit_fields_between_wires(&scanner, &fbox, Side::Right),
            fbox.position
        );
    }

    #[test]
    fn test_fit_without_colliders_is_a_no_op() {
        let scanner = CollisionScanner::new(&[]);
        let fbox = BoundingBox::new(0, 0, 100, 100);

        assert_eq!(
            fit_fields_between_wires(&scanner, &fbox, Side::Top),
            fbox.position
        );
    }

    #[test]
    fn test_fit_aborts_on_non_wire_collider() {
        let scene = [
            wire(50),
            SceneItem::Generic {
                bounds: BoundingBox::new(10, 10, 20, 20),
            },
        ];
        let scanner = CollisionScanner::new(&scene);
        let fbox = BoundingBox::new(0, 0, 100, 100);

        assert_eq!(
            fit_fields_between_wires(&scanner, &fbox, Side::Top),
            fbox.position
        );
    }

    #[test]
    fn test_fit_aborts_when_wires_disagree_on_offset() {
        // One wire on the full row grid, one on the half grid.
        let scene = [wire(100), wire(150)];
        let scanner = CollisionScanner::new(&scene);
        let fbox = BoundingBox::new(0, 90, 100, 100);

        assert_eq!(
            fit_fields_between_wires(&scanner, &fbox, Side::Top),
            fbox.position
        );
    }

    #[test]
    fn test_fit_centers_rows_between_wires() {
        // Wires on the full row grid at y = 100 and y = 200; a three-row box
        // overlapping both slides up so every row lands mid-gap.
        let scene = [wire(100), wire(200)];
        let scanner = CollisionScanner::new(&scene);
        let fbox = BoundingBox::new(0, 75, 100, 200);

        let fitted = fit_fields_between_wires(&scanner, &fbox, Side::Top);
        assert_eq!(fitted, Point::new(0, 50));

        // A bottom box rounds the other way, off the body below.
        let fitted_down = fit_fields_between_wires(&scanner, &fbox, Side::Bottom);
        assert_eq!(fitted_down, Point::new(0, 150));
    }

    #[test]
    fn test_fit_accepts_wires_on_the_half_grid() {
        let scene = [wire(150), wire(250)];
        let scanner = CollisionScanner::new(&scene);
        let fbox = BoundingBox::new(0, 120, 100, 200);

        let fitted = fit_fields_between_wires(&scanner, &fbox, Side::Top);
        // Offset is 100, so the origin lands on the full grid, centered
        // between the half-grid wires.
        assert_eq!(fitted, Point::new(0, 100));
    }
}
