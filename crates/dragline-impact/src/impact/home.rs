use dragline_core::Position;

use super::{DragImpact, DragMovement, DraggableLocation};
use crate::dimension::{DraggableDimension, DraggableId, DroppableDimension};
use crate::no_impact::NO_IMPACT;

/// Impact of moving `draggable` within its own list.
///
/// The item is compared against its original (visible) center: past it, the
/// item pushes following siblings backward once the pointer crosses their
/// leading edge; before it, the item pushes preceding siblings forward once
/// the pointer crosses their trailing edge. Both comparisons are strict, so
/// resting exactly on an edge displaces nothing.
///
/// Only siblings on the travelled side of the item's own slot are candidates,
/// so the destination index always stays inside the list.
pub(super) fn in_home_list(
    page_center: Position,
    draggable: &DraggableDimension,
    home: &DroppableDimension,
    inside_home: &[&DraggableDimension],
) -> DragImpact {
    let start_index = inside_home
        .iter()
        .position(|child| child.id == draggable.id);
    debug_assert!(
        start_index.is_some(),
        "dragged item {} is missing from its home list {}",
        draggable.id,
        home.id
    );
    let Some(start_index) = start_index else {
        return NO_IMPACT;
    };

    let axis = home.axis;
    let current = axis.line_of(home.content_point(page_center));
    let original = axis.line_of(draggable.center());

    let is_beyond_start_position = current > original;

    let moved: Vec<DraggableId> = if is_beyond_start_position {
        // Candidates are axis-ordered; moving forward the nearest one is last.
        inside_home[start_index + 1..]
            .iter()
            .rev()
            .filter(|child| {
                let fragment = &child.page.without_margin;
                axis.line_of(fragment.center()) >= original && current > axis.start_of(fragment)
            })
            .map(|child| child.id.clone())
            .collect()
    } else {
        inside_home[..start_index]
            .iter()
            .filter(|child| {
                let fragment = &child.page.without_margin;
                axis.line_of(fragment.center()) <= original && current < axis.end_of(fragment)
            })
            .map(|child| child.id.clone())
            .collect()
    };

    let index = if is_beyond_start_position {
        start_index + moved.len()
    } else {
        start_index - moved.len()
    };

    DragImpact {
        movement: DragMovement {
            amount: axis.patch(axis.size_of(&draggable.page.with_margin)),
            draggables: moved,
            is_beyond_start_position,
        },
        direction: Some(axis.direction),
        destination: Some(DraggableLocation {
            droppable_id: home.id.clone(),
            index,
        }),
    }
}
