#![forbid(unsafe_code)]

//! Drag impact solver.
//!
//! Given where a dragged item's center currently is and a snapshot of every
//! draggable and droppable dimension, [`compute_drag_impact`] decides which
//! list the item would land in, at what index, and which siblings must shift
//! (and by how much) to make room. It consumes measured geometry only; input
//! capture, rendering and drag lifecycle belong to the host.
//!
//! ```
//! use dragline_core::{Direction, Rect};
//! use dragline_impact::{
//!     DimensionSnapshot, DraggableId, get_draggable_dimension, get_droppable_dimension,
//! };
//!
//! let list = get_droppable_dimension(
//!     "list",
//!     Direction::Vertical,
//!     Rect::new(0.0, 100.0, 300.0, 0.0),
//!     None,
//!     None,
//! );
//! let first = get_draggable_dimension("first", "list", Rect::new(0.0, 100.0, 50.0, 0.0));
//! let second = get_draggable_dimension("second", "list", Rect::new(50.0, 100.0, 100.0, 0.0));
//! let snapshot = DimensionSnapshot::from_dimensions([first, second], [list]).unwrap();
//!
//! // Drag "first" until its center is just past the top of "second".
//! let pointer = dragline_core::Position::new(50.0, 51.0);
//! let impact = snapshot
//!     .compute_impact(pointer, &DraggableId::new("first"))
//!     .unwrap();
//! assert_eq!(impact.movement.draggables, [DraggableId::new("second")]);
//! assert_eq!(impact.destination.unwrap().index, 1);
//! ```

pub mod dimension;
pub mod error;
pub mod impact;
pub mod no_impact;
pub mod snapshot;

pub use dimension::{
    DraggableDimension, DraggableDimensionMap, DraggableId, DraggableMeasurement,
    DroppableDimension, DroppableDimensionMap, DroppableId, DroppableMeasurement, PageBox,
    disable_droppable, enable_droppable, get_draggable_dimension, get_draggables_inside_droppable,
    get_droppable_dimension, measure_draggable, measure_droppable, update_droppable_scroll,
};
pub use error::DimensionError;
pub use impact::{
    DragImpact, DragMovement, DraggableLocation, compute_drag_impact, get_droppable_over,
};
pub use no_impact::NO_IMPACT;
pub use snapshot::DimensionSnapshot;
