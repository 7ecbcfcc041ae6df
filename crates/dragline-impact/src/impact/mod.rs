//! Drag impact computation.
//!
//! [`compute_drag_impact`] answers, for one pointer sample, where the dragged
//! item would land and which items must move out of its way:
//!
//! 1. Resolve the enabled droppable under the pointer (scroll-adjusted).
//! 2. Collect that list's draggables in axis order.
//! 3. Split on home vs. foreign list: in the home list the item can travel
//!    forward or backward past its own slot; in a foreign list it is being
//!    inserted and everything after the insertion point moves forward.
//!
//! Displaced ids are always ordered nearest-to-pointer first. The function is
//! pure: the same snapshot and pointer always yield the same impact.

mod droppable_over;
mod foreign;
mod home;

pub use droppable_over::get_droppable_over;

use dragline_core::{Direction, Position, trace, trace_span};
use serde::{Deserialize, Serialize};

use crate::dimension::{
    DraggableDimension, DraggableDimensionMap, DraggableId, DroppableDimensionMap, DroppableId,
    get_draggables_inside_droppable,
};
use crate::no_impact::NO_IMPACT;

/// Where a dragged item would be dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableLocation {
    pub droppable_id: DroppableId,
    pub index: usize,
}

/// How other draggables must move to make room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragMovement {
    /// Items to shift, nearest to the pointer first.
    pub draggables: Vec<DraggableId>,
    /// Offset each shifted item applies; set on the axis line only.
    pub amount: Position,
    /// The pointer is past the item's original position in its home list.
    pub is_beyond_start_position: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragImpact {
    pub movement: DragMovement,
    /// `None` only for [`NO_IMPACT`].
    pub direction: Option<Direction>,
    pub destination: Option<DraggableLocation>,
}

/// Compute the impact of holding `draggable` with its center at `page_center`.
///
/// `draggables` and `droppables` are the snapshot taken at drag start, with
/// any live scroll updates already applied.
#[must_use]
pub fn compute_drag_impact(
    page_center: Position,
    draggable: &DraggableDimension,
    draggables: &DraggableDimensionMap,
    droppables: &DroppableDimensionMap,
) -> DragImpact {
    let _span = trace_span!("drag_impact", draggable = %draggable.id).entered();

    debug_assert!(
        droppables.contains_key(&draggable.droppable_id),
        "draggable {} references missing droppable {}",
        draggable.id,
        draggable.droppable_id
    );

    let Some(destination) = get_droppable_over(page_center, droppables) else {
        trace!(x = page_center.x, y = page_center.y, "not over any droppable");
        return NO_IMPACT;
    };

    let inside = get_draggables_inside_droppable(destination, draggables);

    let impact = if destination.id == draggable.droppable_id {
        home::in_home_list(page_center, draggable, destination, &inside)
    } else {
        foreign::in_foreign_list(page_center, draggable, destination, &inside)
    };

    trace!(
        droppable = %destination.id,
        index = impact.destination.as_ref().map(|location| location.index),
        displaced = impact.movement.draggables.len(),
        beyond = impact.movement.is_beyond_start_position,
        "resolved impact"
    );
    impact
}
