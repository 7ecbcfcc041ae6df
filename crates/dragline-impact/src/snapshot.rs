//! Immutable per-drag dimension snapshots.
//!
//! A [`DimensionSnapshot`] is validated once and then only ever replaced, never
//! edited. Each map sits behind an [`Arc`], so a scroll update copies the
//! droppable map and shares the (much larger) draggable map with the previous
//! snapshot. Hosts can use [`DimensionSnapshot::shares_draggables`] and
//! [`DimensionSnapshot::shares_droppables`] as a cheap "did this change" check
//! between frames.

use std::sync::Arc;

use dragline_core::Position;
use serde::{Deserialize, Serialize};

use crate::dimension::{
    DraggableDimension, DraggableDimensionMap, DraggableId, DroppableDimension,
    DroppableDimensionMap, DroppableId, disable_droppable, enable_droppable,
    update_droppable_scroll,
};
use crate::error::DimensionError;
use crate::impact::{DragImpact, compute_drag_impact};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot", into = "RawSnapshot")]
pub struct DimensionSnapshot {
    draggables: Arc<DraggableDimensionMap>,
    droppables: Arc<DroppableDimensionMap>,
}

impl DimensionSnapshot {
    /// Validate and wrap a pair of dimension maps.
    ///
    /// Every map key must equal its value's id, and every draggable's home
    /// droppable must be present.
    pub fn new(
        draggables: DraggableDimensionMap,
        droppables: DroppableDimensionMap,
    ) -> Result<Self, DimensionError> {
        for (key, droppable) in &droppables {
            if *key != droppable.id {
                return Err(DimensionError::MismatchedDroppableKey {
                    key: key.clone(),
                    id: droppable.id.clone(),
                });
            }
        }
        for (key, draggable) in &draggables {
            if *key != draggable.id {
                return Err(DimensionError::MismatchedDraggableKey {
                    key: key.clone(),
                    id: draggable.id.clone(),
                });
            }
            if !droppables.contains_key(&draggable.droppable_id) {
                return Err(DimensionError::OrphanDraggable {
                    draggable: draggable.id.clone(),
                    droppable: draggable.droppable_id.clone(),
                });
            }
        }
        Ok(Self {
            draggables: Arc::new(draggables),
            droppables: Arc::new(droppables),
        })
    }

    /// Build a snapshot from dimension lists, keyed by their ids.
    pub fn from_dimensions(
        draggables: impl IntoIterator<Item = DraggableDimension>,
        droppables: impl IntoIterator<Item = DroppableDimension>,
    ) -> Result<Self, DimensionError> {
        Self::new(
            draggables
                .into_iter()
                .map(|draggable| (draggable.id.clone(), draggable))
                .collect(),
            droppables
                .into_iter()
                .map(|droppable| (droppable.id.clone(), droppable))
                .collect(),
        )
    }

    #[must_use]
    pub fn draggables(&self) -> &DraggableDimensionMap {
        &self.draggables
    }

    #[must_use]
    pub fn droppables(&self) -> &DroppableDimensionMap {
        &self.droppables
    }

    pub fn draggable(&self, id: &DraggableId) -> Result<&DraggableDimension, DimensionError> {
        self.draggables
            .get(id)
            .ok_or_else(|| DimensionError::UnknownDraggable {
                draggable: id.clone(),
            })
    }

    pub fn droppable(&self, id: &DroppableId) -> Result<&DroppableDimension, DimensionError> {
        self.droppables
            .get(id)
            .ok_or_else(|| DimensionError::UnknownDroppable {
                droppable: id.clone(),
            })
    }

    /// A new snapshot with `droppable` inserted or replaced.
    ///
    /// The draggable map is shared with `self`.
    #[must_use]
    pub fn with_droppable(&self, droppable: DroppableDimension) -> Self {
        let mut droppables = DroppableDimensionMap::clone(&self.droppables);
        droppables.insert(droppable.id.clone(), droppable);
        Self {
            draggables: Arc::clone(&self.draggables),
            droppables: Arc::new(droppables),
        }
    }

    /// A new snapshot where droppable `id` has scrolled a further `displacement`.
    pub fn with_droppable_scroll(
        &self,
        id: &DroppableId,
        displacement: Position,
    ) -> Result<Self, DimensionError> {
        let scrolled = update_droppable_scroll(self.droppable(id)?, displacement);
        Ok(self.with_droppable(scrolled))
    }

    pub fn with_droppable_disabled(&self, id: &DroppableId) -> Result<Self, DimensionError> {
        let disabled = disable_droppable(self.droppable(id)?);
        Ok(self.with_droppable(disabled))
    }

    pub fn with_droppable_enabled(&self, id: &DroppableId) -> Result<Self, DimensionError> {
        let enabled = enable_droppable(self.droppable(id)?);
        Ok(self.with_droppable(enabled))
    }

    /// Whether both snapshots hold the very same draggable map.
    #[must_use]
    pub fn shares_draggables(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.draggables, &other.draggables)
    }

    /// Whether both snapshots hold the very same droppable map.
    #[must_use]
    pub fn shares_droppables(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.droppables, &other.droppables)
    }

    /// Checked form of [`compute_drag_impact`] that looks the dragged item up by id.
    pub fn compute_impact(
        &self,
        page_center: Position,
        draggable: &DraggableId,
    ) -> Result<DragImpact, DimensionError> {
        let draggable = self.draggable(draggable)?;
        Ok(compute_drag_impact(
            page_center,
            draggable,
            &self.draggables,
            &self.droppables,
        ))
    }
}

/// Wire form: plain lists, validated on the way back in.
#[derive(Serialize, Deserialize)]
struct RawSnapshot {
    draggables: Vec<DraggableDimension>,
    droppables: Vec<DroppableDimension>,
}

impl From<DimensionSnapshot> for RawSnapshot {
    fn from(snapshot: DimensionSnapshot) -> Self {
        let mut draggables: Vec<DraggableDimension> =
            snapshot.draggables.values().cloned().collect();
        let mut droppables: Vec<DroppableDimension> =
            snapshot.droppables.values().cloned().collect();
        draggables.sort_by(|a, b| a.id.cmp(&b.id));
        droppables.sort_by(|a, b| a.id.cmp(&b.id));
        Self {
            draggables,
            droppables,
        }
    }
}

impl TryFrom<RawSnapshot> for DimensionSnapshot {
    type Error = DimensionError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Self::from_dimensions(raw.draggables, raw.droppables)
    }
}
