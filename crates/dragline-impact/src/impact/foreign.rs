use dragline_core::Position;

use super::{DragImpact, DragMovement, DraggableLocation};
use crate::dimension::{DraggableDimension, DraggableId, DroppableDimension};

/// Impact of inserting `draggable` into a list it does not belong to.
///
/// Every member whose trailing edge lies beyond the pointer moves forward to
/// open a gap. The item has no original slot here, so it is never beyond its
/// start position.
pub(super) fn in_foreign_list(
    page_center: Position,
    draggable: &DraggableDimension,
    destination: &DroppableDimension,
    inside_destination: &[&DraggableDimension],
) -> DragImpact {
    let axis = destination.axis;
    let current = axis.line_of(destination.content_point(page_center));

    // Already nearest first: the displaced run starts at the insertion point.
    let moved: Vec<DraggableId> = inside_destination
        .iter()
        .filter(|child| axis.end_of(&child.page.without_margin) > current)
        .map(|child| child.id.clone())
        .collect();

    let index = inside_destination.len() - moved.len();

    DragImpact {
        movement: DragMovement {
            amount: axis.patch(axis.size_of(&draggable.page.with_margin)),
            draggables: moved,
            is_beyond_start_position: false,
        },
        direction: Some(axis.direction),
        destination: Some(DraggableLocation {
            droppable_id: destination.id.clone(),
            index,
        }),
    }
}
