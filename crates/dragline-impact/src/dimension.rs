//! Draggable and droppable dimensions.
//!
//! Dimensions are measured once (by the host) and never mutated afterwards.
//! Anything that changes during a drag, such as a list scrolling or being
//! disabled, produces a new dimension value through the functions below.

use std::fmt;

use dragline_core::{Axis, Direction, Position, Rect, Sides};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Stable identifier of a draggable item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraggableId(String);

/// Stable identifier of a droppable list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DroppableId(String);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

impl_id!(DraggableId);
impl_id!(DroppableId);

/// Border box and margin box of a draggable, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageBox {
    /// Includes the element's margin. Drives the displacement amount.
    pub with_margin: Rect,
    /// The visible element. Drives containment and ordering.
    pub without_margin: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraggableDimension {
    pub id: DraggableId,
    pub droppable_id: DroppableId,
    pub page: PageBox,
}

impl DraggableDimension {
    /// Center of the visible element.
    #[inline]
    pub fn center(&self) -> Position {
        self.page.without_margin.center()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppableDimension {
    pub id: DroppableId,
    pub axis: Axis,
    pub is_enabled: bool,
    /// How far the list's content has scrolled since it was measured.
    pub scroll: Position,
    pub page: Rect,
}

impl DroppableDimension {
    /// Translate a page-space point into this list's content space.
    ///
    /// Used for ordering against the list's members, whose stored geometry
    /// predates any scroll.
    #[inline]
    pub fn content_point(&self, page_point: Position) -> Position {
        page_point + self.scroll
    }

    /// The page rect offset by the list's scroll.
    #[inline]
    pub fn hit_region(&self) -> Rect {
        self.page.translate(self.scroll)
    }

    /// Whether `page_point` falls inside [`hit_region`](Self::hit_region).
    #[inline]
    pub fn is_over(&self, page_point: Position) -> bool {
        self.hit_region().contains(page_point)
    }
}

pub type DraggableDimensionMap = FxHashMap<DraggableId, DraggableDimension>;
pub type DroppableDimensionMap = FxHashMap<DroppableId, DroppableDimension>;

/// Extra inputs for measuring a draggable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraggableMeasurement {
    margin: Sides,
    window_scroll: Position,
}

impl DraggableMeasurement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element's computed margin.
    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    /// Set the window scroll at measurement time (client to page offset).
    pub fn window_scroll(mut self, window_scroll: Position) -> Self {
        self.window_scroll = window_scroll;
        self
    }
}

/// Extra inputs for measuring a droppable.
#[derive(Debug, Clone, Copy)]
pub struct DroppableMeasurement {
    scroll: Position,
    is_enabled: bool,
    window_scroll: Position,
}

impl Default for DroppableMeasurement {
    fn default() -> Self {
        Self {
            scroll: Position::ORIGIN,
            is_enabled: true,
            window_scroll: Position::ORIGIN,
        }
    }
}

impl DroppableMeasurement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial content scroll.
    pub fn scroll(mut self, scroll: Position) -> Self {
        self.scroll = scroll;
        self
    }

    /// Set whether the list accepts drops.
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Set the window scroll at measurement time (client to page offset).
    pub fn window_scroll(mut self, window_scroll: Position) -> Self {
        self.window_scroll = window_scroll;
        self
    }
}

/// Measure a draggable with no margin and no window scroll.
pub fn get_draggable_dimension(
    id: impl Into<DraggableId>,
    droppable_id: impl Into<DroppableId>,
    client_rect: Rect,
) -> DraggableDimension {
    measure_draggable(id, droppable_id, client_rect, DraggableMeasurement::default())
}

pub fn measure_draggable(
    id: impl Into<DraggableId>,
    droppable_id: impl Into<DroppableId>,
    client_rect: Rect,
    measurement: DraggableMeasurement,
) -> DraggableDimension {
    let without_margin = client_rect.translate(measurement.window_scroll);
    DraggableDimension {
        id: id.into(),
        droppable_id: droppable_id.into(),
        page: PageBox {
            with_margin: without_margin.outset(measurement.margin),
            without_margin,
        },
    }
}

/// Measure a droppable.
///
/// `scroll` defaults to the origin and `is_enabled` to `true`.
pub fn get_droppable_dimension(
    id: impl Into<DroppableId>,
    direction: Direction,
    client_rect: Rect,
    scroll: Option<Position>,
    is_enabled: Option<bool>,
) -> DroppableDimension {
    let mut measurement = DroppableMeasurement::default();
    if let Some(scroll) = scroll {
        measurement = measurement.scroll(scroll);
    }
    if let Some(is_enabled) = is_enabled {
        measurement = measurement.enabled(is_enabled);
    }
    measure_droppable(id, direction, client_rect, measurement)
}

pub fn measure_droppable(
    id: impl Into<DroppableId>,
    direction: Direction,
    client_rect: Rect,
    measurement: DroppableMeasurement,
) -> DroppableDimension {
    DroppableDimension {
        id: id.into(),
        axis: Axis::for_direction(direction),
        is_enabled: measurement.is_enabled,
        scroll: measurement.scroll,
        page: client_rect.translate(measurement.window_scroll),
    }
}

/// A copy of `droppable` scrolled a further `displacement`.
#[must_use]
pub fn update_droppable_scroll(
    droppable: &DroppableDimension,
    displacement: Position,
) -> DroppableDimension {
    DroppableDimension {
        scroll: droppable.scroll + displacement,
        ..droppable.clone()
    }
}

#[must_use]
pub fn disable_droppable(droppable: &DroppableDimension) -> DroppableDimension {
    DroppableDimension {
        is_enabled: false,
        ..droppable.clone()
    }
}

#[must_use]
pub fn enable_droppable(droppable: &DroppableDimension) -> DroppableDimension {
    DroppableDimension {
        is_enabled: true,
        ..droppable.clone()
    }
}

/// Every draggable in `droppable`, ordered along its axis.
///
/// Order is by the visible center on the axis line; equal centers fall back
/// to id so the result never depends on map iteration order.
pub fn get_draggables_inside_droppable<'a>(
    droppable: &DroppableDimension,
    draggables: &'a DraggableDimensionMap,
) -> Vec<&'a DraggableDimension> {
    let axis = droppable.axis;
    let mut inside: Vec<&DraggableDimension> = draggables
        .values()
        .filter(|draggable| draggable.droppable_id == droppable.id)
        .collect();
    inside.sort_by(|a, b| {
        axis.line_of(a.center())
            .total_cmp(&axis.line_of(b.center()))
            .then_with(|| a.id.cmp(&b.id))
    });
    inside
}
