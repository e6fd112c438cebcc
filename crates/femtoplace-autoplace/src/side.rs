//! Side classification, ranking, and selection.

use crate::collision::{Collision, CollisionScanner};
use crate::fieldbox::field_box_placement;
use femtoplace_schematic::{BoundingBox, Rotation, Size, Symbol};
use log::trace;

/// A placement direction relative to the symbol's body box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Outward unit vector in screen coordinates (y grows downward).
    pub(crate) fn unit_vector(self) -> (i32, i32) {
        match self {
            Side::Top => (0, -1),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
        }
    }
}

/// A candidate side paired with the number of pins it carries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankedSide {
    pub side: Side,
    pub pins: usize,
}

/// Map a pin's draw direction to the side of the body it occupies. A pin
/// drawn pointing right enters the body from the left, so it claims the
/// left side; the other directions follow symmetrically.
pub(crate) fn side_for_pin_vector(vector: (i32, i32)) -> Side {
    match vector {
        (1, 0) => Side::Left,
        (-1, 0) => Side::Right,
        (0, -1) => Side::Bottom,
        (0, 1) => Side::Top,
        other => {
            debug_assert!(false, "pin draw direction is not cardinal: {other:?}");
            Side::Left
        }
    }
}

/// Count the visible pins occupying one side of the symbol.
pub(crate) fn pins_on_side(symbol: &Symbol, side: Side) -> usize {
    symbol
        .pins
        .iter()
        .filter(|pin| pin.visible && side_for_pin_vector(symbol.pin_draw_vector(pin)) == side)
        .count()
}

/// Candidate sides in evaluation order, most preferred first.
///
/// The base order reads outputs to the right, then above, then left, then
/// below. Mirroring about the vertical axis at an upright rotation swaps the
/// left/right entries; a body more than three times wider than tall promotes
/// the vertical sides so labels stack above and below the long axis.
pub(crate) fn preferred_sides(symbol: &Symbol) -> Vec<RankedSide> {
    let ranked = |side| RankedSide {
        side,
        pins: pins_on_side(symbol, side),
    };
    let mut sides = vec![
        ranked(Side::Right),
        ranked(Side::Top),
        ranked(Side::Left),
        ranked(Side::Bottom),
    ];

    let orientation = symbol.orientation;
    if orientation.mirrored && matches!(orientation.rotation, Rotation::R0 | Rotation::R180) {
        sides.swap(0, 2);
    }

    let body = symbol.body_bounding_box();
    if body.width() > 3 * body.height() {
        sides.swap(0, 1);
        sides.swap(1, 3);
    }

    sides
}

/// Pick from the ranked list alone: the first side with no pins, else the
/// fewest pins. Ties go to the later-ranked side, by a single scan in rank
/// order where an equal count replaces the running best.
pub(crate) fn choose_unobstructed(ranked: &[RankedSide]) -> Side {
    for candidate in ranked {
        if candidate.pins == 0 {
            return candidate.side;
        }
    }

    let mut best = RankedSide {
        side: Side::Right,
        pins: usize::MAX,
    };
    for candidate in ranked {
        if candidate.pins <= best.pins {
            best = *candidate;
        }
    }
    best.side
}

/// Drop every ranked side whose collision matches `kind`, remembering the
/// best (fewest-pin, later-processed on ties) dropped side as a fallback.
fn filter_colliding(
    ranked: &mut Vec<RankedSide>,
    collisions: &[(Side, Collision)],
    kind: Collision,
    fallback: &mut RankedSide,
) {
    ranked.retain(|candidate| {
        let collides = collisions
            .iter()
            .any(|(side, collision)| *side == candidate.side && *collision == kind);

        if collides && candidate.pins <= fallback.pins {
            *fallback = *candidate;
        }
        !collides
    });
}

/// Collision-avoiding selection: prefer a clean side regardless of pin
/// counts, then fall back on the least-pinned colliding side, preferring a
/// side that only crosses horizontal wire rows over one buried in objects.
pub(crate) fn choose_side_avoiding(
    scanner: &CollisionScanner<'_>,
    body: &BoundingBox,
    box_size: Size,
    mut ranked: Vec<RankedSide>,
) -> Side {
    let collisions: Vec<(Side, Collision)> = ranked
        .iter()
        .map(|candidate| {
            let origin = field_box_placement(body, box_size, candidate.side);
            let fbox = BoundingBox::from_position_and_size(origin, box_size);
            (candidate.side, scanner.classify(&fbox, candidate.side))
        })
        .collect();
    trace!("per-side collisions: {collisions:?}");

    let mut fallback = RankedSide {
        side: Side::Right,
        pins: usize::MAX,
    };
    filter_colliding(&mut ranked, &collisions, Collision::Objects, &mut fallback);
    filter_colliding(
        &mut ranked,
        &collisions,
        Collision::HorizontalWireRows,
        &mut fallback,
    );

    if ranked.is_empty() {
        trace!("every side collides; falling back to {:?}", fallback.side);
        fallback.side
    } else {
        choose_unobstructed(&ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use femtoplace_schematic::{Orientation, Pin, PinDirection, Point};

    fn bare_symbol(body: BoundingBox) -> Symbol {
        Symbol {
            reference: "U1".to_string(),
            position: Point::new(0, 0),
            body,
            orientation: Orientation::default(),
            pins: Vec::new(),
            fields: Vec::new(),
            in_netlist: true,
            fields_autoplaced: false,
        }
    }

    fn pin(direction: PinDirection) -> Pin {
        Pin {
            number: "1".to_string(),
            position: Point::new(0, 0),
            direction,
            visible: true,
        }
    }

    fn order(ranked: &[RankedSide]) -> Vec<Side> {
        ranked.iter().map(|r| r.side).collect()
    }

    #[test]
    fn test_pin_side_mapping_is_an_involution() {
        assert_eq!(side_for_pin_vector((1, 0)), Side::Left);
        assert_eq!(side_for_pin_vector((-1, 0)), Side::Right);
        assert_eq!(side_for_pin_vector((0, -1)), Side::Bottom);
        assert_eq!(side_for_pin_vector((0, 1)), Side::Top);
    }

    #[test]
    fn test_invisible_pins_are_not_counted() {
        let mut symbol = bare_symbol(BoundingBox::new(0, 0, 200, 200));
        symbol.pins.push(pin(PinDirection::Right));
        symbol.pins.push(pin(PinDirection::Right));
        symbol.pins[1].visible = false;

        assert_eq!(pins_on_side(&symbol, Side::Left), 1);
        assert_eq!(pins_on_side(&symbol, Side::Right), 0);
    }

    #[test]
    fn test_base_ranking_order() {
        let symbol = bare_symbol(BoundingBox::new(0, 0, 200, 200));
        assert_eq!(
            order(&preferred_sides(&symbol)),
            vec![Side::Right, Side::Top, Side::Left, Side::Bottom]
        );
    }

    #[test]
    fn test_mirrored_ranking_swaps_left_and_right() {
        let mut symbol = bare_symbol(BoundingBox::new(0, 0, 200, 200));
        symbol.orientation = Orientation::new(Rotation::R0, true);
        assert_eq!(
            order(&preferred_sides(&symbol)),
            vec![Side::Left, Side::Top, Side::Right, Side::Bottom]
        );

        // At a quarter turn the mirror does not read as a left/right swap.
        symbol.orientation = Orientation::new(Rotation::R90, true);
        assert_eq!(
            order(&preferred_sides(&symbol)),
            vec![Side::Right, Side::Top, Side::Left, Side::Bottom]
        );
    }

    #[test]
    fn test_wide_body_prefers_vertical_sides() {
        let symbol = bare_symbol(BoundingBox::new(0, 0, 700, 200));
        assert_eq!(
            order(&preferred_sides(&symbol)),
            vec![Side::Top, Side::Bottom, Side::Left, Side::Right]
        );

        // 3x exactly is not "more than 3x".
        let squat = bare_symbol(BoundingBox::new(0, 0, 600, 200));
        assert_eq!(
            order(&preferred_sides(&squat)),
            vec![Side::Right, Side::Top, Side::Left, Side::Bottom]
        );
    }

    #[test]
    fn test_first_zero_pin_side_wins() {
        let mut symbol = bare_symbol(BoundingBox::new(0, 0, 200, 200));
        symbol.pins.push(pin(PinDirection::Right)); // left side
        symbol.pins.push(pin(PinDirection::Up)); // bottom side

        assert_eq!(choose_unobstructed(&preferred_sides(&symbol)), Side::Right);
    }

    #[test]
    fn test_all_pinned_ties_go_to_later_ranked_side() {
        let ranked = vec![
            RankedSide { side: Side::Right, pins: 2 },
            RankedSide { side: Side::Top, pins: 1 },
            RankedSide { side: Side::Left, pins: 1 },
            RankedSide { side: Side::Bottom, pins: 3 },
        ];
        assert_eq!(choose_unobstructed(&ranked), Side::Left);
    }

    #[test]
    fn test_fewest_pins_wins_outright() {
        let ranked = vec![
            RankedSide { side: Side::Right, pins: 2 },
            RankedSide { side: Side::Top, pins: 4 },
            RankedSide { side: Side::Left, pins: 3 },
            RankedSide { side: Side::Bottom, pins: 5 },
        ];
        assert_eq!(choose_unobstructed(&ranked), Side::Right);
    }
}
