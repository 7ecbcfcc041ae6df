#![forbid(unsafe_code)]

//! Reference layouts for impact tests.
//!
//! The standard preset is three side-by-side lists laid out on the chosen
//! axis: a populated home list, a populated foreign list, and an empty
//! foreign list. Each populated list holds four equally sized items separated
//! by their margins:
//!
//! ```text
//!  line  0 ┌ home ──────┐┌ foreign ───┐┌ empty ─────┐
//!      110 │ [drag-0]   ││ [drag-0]   ││            │
//!      170 │ [drag-1]   ││ [drag-1]   ││            │
//!      230 │ [drag-2]   ││ [drag-2]   ││            │
//!      290 │ [drag-3]   ││ [drag-3]   ││            │
//!      500 └────────────┘└────────────┘└────────────┘
//! ```
//!
//! A list's hit region follows its scroll, so the items sit well inside the
//! list on both sides: a pointer resting on an item stays over its list while
//! the list scrolls by up to [`LIST_LEAD`] in either direction.

use dragline_core::{Axis, Rect, Sides};
use dragline_impact::{
    DimensionSnapshot, DraggableDimension, DraggableDimensionMap, DraggableMeasurement,
    DroppableDimension, DroppableDimensionMap, DroppableId, DroppableMeasurement,
    measure_draggable, measure_droppable,
};

/// Margin applied on every side of every preset item.
pub const ITEM_MARGIN: f64 = 10.0;
/// Visible (margin-exclusive) size of every preset item along the line.
pub const ITEM_SIZE: f64 = 40.0;
/// Space along the line between a list's leading edge and its first item's
/// margin box.
pub const LIST_LEAD: f64 = 100.0;
/// Length of every preset list along the line.
pub const LIST_LENGTH: f64 = 500.0;
/// Breadth of every preset list across the line.
pub const LIST_BREADTH: f64 = 100.0;
/// Gap between neighbouring lists across the line.
pub const LIST_GAP: f64 = 10.0;

/// Build a rect from ranges expressed along `axis`.
pub fn axis_rect(
    axis: Axis,
    line_start: f64,
    line_end: f64,
    cross_start: f64,
    cross_end: f64,
) -> Rect {
    let start = axis.patch_with_cross(line_start, cross_start);
    let end = axis.patch_with_cross(line_end, cross_end);
    Rect::new(start.y, end.x, end.y, start.x)
}

/// A droppable together with its measured draggables.
#[derive(Debug, Clone)]
pub struct DroppableWithDraggables {
    pub droppable: DroppableDimension,
    /// Draggables in list order.
    pub draggables: Vec<DraggableDimension>,
}

impl DroppableWithDraggables {
    /// Keyed map of the draggables.
    pub fn draggable_map(&self) -> DraggableDimensionMap {
        self.draggables
            .iter()
            .map(|draggable| (draggable.id.clone(), draggable.clone()))
            .collect()
    }
}

/// Measure a droppable and its draggables.
///
/// Draggable ids are `"{droppable_id}::drag-{index}"`.
pub fn droppable_with_draggables(
    axis: Axis,
    droppable_id: &str,
    droppable_rect: Rect,
    draggable_rects: &[Rect],
    margin: Sides,
) -> DroppableWithDraggables {
    let droppable = measure_droppable(
        droppable_id,
        axis.direction,
        droppable_rect,
        DroppableMeasurement::new(),
    );
    let draggables = draggable_rects
        .iter()
        .enumerate()
        .map(|(index, rect)| {
            measure_draggable(
                format!("{droppable_id}::drag-{index}"),
                droppable_id,
                *rect,
                DraggableMeasurement::new().margin(margin),
            )
        })
        .collect();
    DroppableWithDraggables {
        droppable,
        draggables,
    }
}

/// The standard three-list layout.
#[derive(Debug, Clone)]
pub struct Preset {
    pub axis: Axis,
    pub home: DroppableDimension,
    pub in_home: [DraggableDimension; 4],
    pub foreign: DroppableDimension,
    pub in_foreign: [DraggableDimension; 4],
    pub empty_foreign: DroppableDimension,
    pub draggables: DraggableDimensionMap,
    pub droppables: DroppableDimensionMap,
}

impl Preset {
    /// The preset as a validated snapshot.
    pub fn snapshot(&self) -> DimensionSnapshot {
        DimensionSnapshot::new(self.draggables.clone(), self.droppables.clone())
            .expect("preset dimensions are consistent")
    }

    /// Droppable map with `droppable` replacing the entry of the same id.
    pub fn droppables_with(&self, droppable: DroppableDimension) -> DroppableDimensionMap {
        let mut droppables = self.droppables.clone();
        droppables.insert(droppable.id.clone(), droppable);
        droppables
    }
}

fn populated_list(axis: Axis, id: &str, cross_start: f64) -> DroppableWithDraggables {
    let item_cross_start = cross_start + ITEM_MARGIN;
    let item_cross_end = cross_start + LIST_BREADTH - ITEM_MARGIN;
    let stride = ITEM_SIZE + 2.0 * ITEM_MARGIN;
    let rects: Vec<Rect> = (0..4)
        .map(|index| {
            let start = LIST_LEAD + ITEM_MARGIN + stride * f64::from(index);
            axis_rect(
                axis,
                start,
                start + ITEM_SIZE,
                item_cross_start,
                item_cross_end,
            )
        })
        .collect();
    droppable_with_draggables(
        axis,
        id,
        axis_rect(axis, 0.0, LIST_LENGTH, cross_start, cross_start + LIST_BREADTH),
        &rects,
        Sides::all(ITEM_MARGIN),
    )
}

fn into_four(draggables: Vec<DraggableDimension>) -> [DraggableDimension; 4] {
    draggables
        .try_into()
        .unwrap_or_else(|rest: Vec<DraggableDimension>| {
            panic!("expected four preset items, got {}", rest.len())
        })
}

/// Build the standard preset on `axis`.
pub fn preset(axis: Axis) -> Preset {
    let home = populated_list(axis, "home", 0.0);
    let foreign = populated_list(axis, "foreign", LIST_BREADTH + LIST_GAP);
    let empty_cross_start = 2.0 * (LIST_BREADTH + LIST_GAP);
    let empty_foreign = measure_droppable(
        "empty-foreign",
        axis.direction,
        axis_rect(
            axis,
            0.0,
            LIST_LENGTH,
            empty_cross_start,
            empty_cross_start + LIST_BREADTH,
        ),
        DroppableMeasurement::new(),
    );

    let mut draggables = home.draggable_map();
    draggables.extend(foreign.draggable_map());

    let droppables: DroppableDimensionMap = [&home.droppable, &foreign.droppable, &empty_foreign]
        .into_iter()
        .map(|droppable| (droppable.id.clone(), droppable.clone()))
        .collect();

    Preset {
        axis,
        home: home.droppable,
        in_home: into_four(home.draggables),
        foreign: foreign.droppable,
        in_foreign: into_four(foreign.draggables),
        empty_foreign,
        draggables,
        droppables,
    }
}

/// Id of the preset's empty foreign list.
pub fn empty_foreign_id() -> DroppableId {
    DroppableId::new("empty-foreign")
}
