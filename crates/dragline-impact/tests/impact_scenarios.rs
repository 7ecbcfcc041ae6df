//! Scenario tests for `compute_drag_impact` on both axes.
//!
//! Every scenario runs against the harness preset: a home list and a foreign
//! list of four items each, plus an empty foreign list. Pointer positions are
//! built from item edges through the axis so the same assertions hold for
//! vertical and horizontal layouts.

use dragline_core::{Axis, HORIZONTAL, Position, VERTICAL, add, subtract};
use dragline_harness::preset::{Preset, preset};
use dragline_impact::{
    DragImpact, DragMovement, DraggableDimension, DraggableId, DraggableLocation,
    DroppableDimension, NO_IMPACT, compute_drag_impact, disable_droppable,
    update_droppable_scroll,
};

const AXES: [Axis; 2] = [VERTICAL, HORIZONTAL];

fn start(axis: Axis, draggable: &DraggableDimension) -> f64 {
    axis.start_of(&draggable.page.without_margin)
}

fn end(axis: Axis, draggable: &DraggableDimension) -> f64 {
    axis.end_of(&draggable.page.without_margin)
}

fn cross(axis: Axis, draggable: &DraggableDimension) -> f64 {
    axis.cross_of(draggable.center())
}

fn ids(draggables: &[&DraggableDimension]) -> Vec<DraggableId> {
    draggables.iter().map(|d| d.id.clone()).collect()
}

fn expected(
    axis: Axis,
    dragging: &DraggableDimension,
    displaced: &[&DraggableDimension],
    is_beyond_start_position: bool,
    destination: &DroppableDimension,
    index: usize,
) -> DragImpact {
    DragImpact {
        movement: DragMovement {
            amount: axis.patch(axis.size_of(&dragging.page.with_margin)),
            draggables: ids(displaced),
            is_beyond_start_position,
        },
        direction: Some(axis.direction),
        destination: Some(DraggableLocation {
            droppable_id: destination.id.clone(),
            index,
        }),
    }
}

fn impact(preset: &Preset, pointer: Position, dragging: &DraggableDimension) -> DragImpact {
    compute_drag_impact(pointer, dragging, &preset.draggables, &preset.droppables)
}

// ── Outside / disabled ──────────────────────────────────────────────────

#[test]
fn no_impact_when_not_over_anything() {
    for axis in AXES {
        let p = preset(axis);
        let far_away = Position::new(1000.0, 1000.0);
        assert_eq!(impact(&p, far_away, &p.in_home[0]), NO_IMPACT);
    }
}

#[test]
fn no_impact_in_the_gap_between_lists() {
    for axis in AXES {
        let p = preset(axis);
        let home_cross_end = axis.cross_of(Position::new(p.home.page.right, p.home.page.bottom));
        let pointer = axis.patch_with_cross(start(axis, &p.in_home[1]), home_cross_end + 1.0);
        assert_eq!(impact(&p, pointer, &p.in_home[0]), NO_IMPACT);
    }
}

#[test]
fn no_impact_when_home_is_disabled() {
    for axis in AXES {
        let p = preset(axis);
        let droppables = p.droppables_with(disable_droppable(&p.home));
        let pointer = p.in_home[1].center();
        let result = compute_drag_impact(pointer, &p.in_home[0], &p.draggables, &droppables);
        assert_eq!(result, NO_IMPACT);
    }
}

#[test]
fn no_impact_when_foreign_is_disabled() {
    for axis in AXES {
        let p = preset(axis);
        let droppables = p.droppables_with(disable_droppable(&p.foreign));
        let pointer = p.in_foreign[0].center();
        let result = compute_drag_impact(pointer, &p.in_home[0], &p.draggables, &droppables);
        assert_eq!(result, NO_IMPACT);
    }
}

// ── Home list ───────────────────────────────────────────────────────────

#[test]
fn over_original_position_keeps_index() {
    for axis in AXES {
        let p = preset(axis);
        let [first, second, third, fourth] = &p.in_home;
        for (index, dragging) in [first, second, third, fourth].into_iter().enumerate() {
            let result = impact(&p, dragging.center(), dragging);
            assert_eq!(
                result,
                expected(axis, dragging, &[], false, &p.home, index),
                "{:?} item {index}",
                axis.direction
            );
        }
    }
}

#[test]
fn up_to_next_edge_does_not_displace() {
    for axis in AXES {
        let p = preset(axis);
        let [first, second, ..] = &p.in_home;
        let pointer = axis.patch_with_cross(start(axis, second), cross(axis, first));
        assert_eq!(
            impact(&p, pointer, first),
            expected(axis, first, &[], true, &p.home, 0)
        );
    }
}

#[test]
fn one_unit_past_next_edge_displaces_it() {
    for axis in AXES {
        let p = preset(axis);
        let [first, second, ..] = &p.in_home;
        let pointer = axis.patch_with_cross(start(axis, second) + 1.0, cross(axis, first));
        assert_eq!(
            impact(&p, pointer, first),
            expected(axis, first, &[second], true, &p.home, 1)
        );
    }
}

#[test]
fn displacement_grows_as_edges_are_passed() {
    for axis in AXES {
        let p = preset(axis);
        let [first, second, third, fourth] = &p.in_home;
        let mut previous = 0;
        for (passed, next) in [second, third, fourth].into_iter().enumerate() {
            let pointer = axis.patch_with_cross(start(axis, next) + 1.0, cross(axis, first));
            let result = impact(&p, pointer, first);
            let displaced = result.movement.draggables.len();
            assert_eq!(displaced, passed + 1);
            assert!(displaced > previous);
            assert_eq!(result.movement.draggables[0], next.id, "nearest first");
            previous = displaced;
        }
    }
}

#[test]
fn moving_beyond_start_position() {
    for axis in AXES {
        let p = preset(axis);
        let [_, second, third, fourth] = &p.in_home;
        let pointer = axis.patch_with_cross(start(axis, fourth) + 1.0, cross(axis, second));
        assert_eq!(
            impact(&p, pointer, second),
            expected(axis, second, &[fourth, third], true, &p.home, 3)
        );
    }
}

#[test]
fn moving_back_past_start_position() {
    for axis in AXES {
        let p = preset(axis);
        let [first, second, third, _] = &p.in_home;
        let pointer = axis.patch_with_cross(end(axis, first) - 1.0, cross(axis, third));
        assert_eq!(
            impact(&p, pointer, third),
            expected(axis, third, &[first, second], false, &p.home, 0)
        );
    }
}

#[test]
fn backward_up_to_previous_edge_does_not_displace() {
    for axis in AXES {
        let p = preset(axis);
        let [_, _, third, fourth] = &p.in_home;
        let pointer = axis.patch_with_cross(end(axis, third), cross(axis, fourth));
        assert_eq!(
            impact(&p, pointer, fourth),
            expected(axis, fourth, &[], false, &p.home, 3)
        );
    }
}

#[test]
fn home_scroll_moves_past_next_item() {
    for axis in AXES {
        let p = preset(axis);
        let [first, second, ..] = &p.in_home;
        let start_of_second = axis.patch_with_cross(start(axis, second), cross(axis, second));
        let distance = add(subtract(start_of_second, first.center()), axis.patch(1.0));
        let droppables = p.droppables_with(update_droppable_scroll(&p.home, distance));

        let result = compute_drag_impact(first.center(), first, &p.draggables, &droppables);
        assert_eq!(result, expected(axis, first, &[second], true, &p.home, 1));
    }
}

#[test]
fn home_scroll_moves_back_past_items() {
    for axis in AXES {
        let p = preset(axis);
        let [_, second, third, fourth] = &p.in_home;
        let end_of_second = axis.patch_with_cross(end(axis, second), cross(axis, second));
        let distance = add(subtract(end_of_second, fourth.center()), axis.patch(-1.0));
        let droppables = p.droppables_with(update_droppable_scroll(&p.home, distance));

        let result = compute_drag_impact(fourth.center(), fourth, &p.draggables, &droppables);
        assert_eq!(
            result,
            expected(axis, fourth, &[second, third], false, &p.home, 1)
        );
    }
}

#[test]
fn home_scroll_across_one_boundary_shifts_index_by_one() {
    for axis in AXES {
        let p = preset(axis);
        let [_, second, third, _] = &p.in_home;
        // Resting just short of the third item's leading edge.
        let pointer = axis.patch_with_cross(start(axis, third), cross(axis, second));
        let before = impact(&p, pointer, second);
        let droppables = p.droppables_with(update_droppable_scroll(&p.home, axis.patch(1.0)));
        let after = compute_drag_impact(pointer, second, &p.draggables, &droppables);

        let before_index = before.destination.unwrap().index;
        let after_index = after.destination.unwrap().index;
        assert_eq!(after_index, before_index + 1);
        assert_eq!(after.movement.draggables, [third.id.clone()]);
    }
}

// ── Foreign lists ───────────────────────────────────────────────────────

#[test]
fn into_start_of_populated_foreign_list() {
    for axis in AXES {
        let p = preset(axis);
        let [f1, f2, f3, f4] = &p.in_foreign;
        let pointer = axis.patch_with_cross(start(axis, f1) + 1.0, cross(axis, f1));
        assert_eq!(
            impact(&p, pointer, &p.in_home[0]),
            expected(axis, &p.in_home[0], &[f1, f2, f3, f4], false, &p.foreign, 0)
        );
    }
}

#[test]
fn into_middle_of_populated_foreign_list() {
    for axis in AXES {
        let p = preset(axis);
        let [_, f2, f3, f4] = &p.in_foreign;
        let pointer = axis.patch_with_cross(start(axis, f2) + 1.0, cross(axis, f2));
        assert_eq!(
            impact(&p, pointer, &p.in_home[0]),
            expected(axis, &p.in_home[0], &[f2, f3, f4], false, &p.foreign, 1)
        );
    }
}

#[test]
fn into_end_of_populated_foreign_list() {
    for axis in AXES {
        let p = preset(axis);
        let f4 = &p.in_foreign[3];
        let pointer = axis.patch_with_cross(end(axis, f4), cross(axis, f4));
        assert_eq!(
            impact(&p, pointer, &p.in_home[0]),
            expected(axis, &p.in_home[0], &[], false, &p.foreign, 4)
        );
    }
}

#[test]
fn into_empty_foreign_list() {
    for axis in AXES {
        let p = preset(axis);
        let pointer = p.empty_foreign.page.center();
        assert_eq!(
            impact(&p, pointer, &p.in_home[0]),
            expected(axis, &p.in_home[0], &[], false, &p.empty_foreign, 0)
        );
    }
}

#[test]
fn foreign_amount_uses_dragged_item_size() {
    for axis in AXES {
        let p = preset(axis);
        let result = impact(&p, p.in_foreign[1].center(), &p.in_home[2]);
        assert_eq!(
            result.movement.amount,
            axis.patch(axis.size_of(&p.in_home[2].page.with_margin))
        );
        assert!(!result.movement.is_beyond_start_position);
    }
}

#[test]
fn foreign_scroll_changes_the_impact() {
    for axis in AXES {
        let p = preset(axis);
        let [_, f2, f3, f4] = &p.in_foreign;
        let distance = start(axis, f3) - start(axis, f2);
        let droppables =
            p.droppables_with(update_droppable_scroll(&p.foreign, axis.patch(distance)));
        let pointer = axis.patch_with_cross(start(axis, f2), cross(axis, f2));

        let scrolled = compute_drag_impact(pointer, &p.in_home[0], &p.draggables, &droppables);
        assert_eq!(
            scrolled,
            expected(axis, &p.in_home[0], &[f3, f4], false, &p.foreign, 2)
        );

        // Without the scroll the item would land one slot earlier.
        let unscrolled = impact(&p, pointer, &p.in_home[0]);
        assert_eq!(
            unscrolled,
            expected(axis, &p.in_home[0], &[f2, f3, f4], false, &p.foreign, 1)
        );
    }
}

#[test]
fn home_scroll_does_not_affect_foreign_target() {
    for axis in AXES {
        let p = preset(axis);
        let pointer = axis.patch_with_cross(
            start(axis, &p.in_foreign[1]) + 1.0,
            cross(axis, &p.in_foreign[1]),
        );
        let droppables = p.droppables_with(update_droppable_scroll(&p.home, axis.patch(120.0)));
        let with_home_scroll =
            compute_drag_impact(pointer, &p.in_home[0], &p.draggables, &droppables);
        assert_eq!(with_home_scroll, impact(&p, pointer, &p.in_home[0]));
    }
}
