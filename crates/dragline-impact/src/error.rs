//! Errors for checked snapshot construction and lookups.

use std::fmt;

use crate::dimension::{DraggableId, DroppableId};

/// A dimension snapshot that breaks the caller contract.
///
/// The unchecked solver treats these as programming errors; the checked
/// [`DimensionSnapshot`](crate::DimensionSnapshot) API reports them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    UnknownDraggable {
        draggable: DraggableId,
    },
    UnknownDroppable {
        droppable: DroppableId,
    },
    /// A draggable names a home droppable that is not in the snapshot.
    OrphanDraggable {
        draggable: DraggableId,
        droppable: DroppableId,
    },
    MismatchedDraggableKey {
        key: DraggableId,
        id: DraggableId,
    },
    MismatchedDroppableKey {
        key: DroppableId,
        id: DroppableId,
    },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDraggable { draggable } => write!(f, "draggable {draggable} not found"),
            Self::UnknownDroppable { droppable } => write!(f, "droppable {droppable} not found"),
            Self::OrphanDraggable {
                draggable,
                droppable,
            } => write!(
                f,
                "draggable {draggable} references missing droppable {droppable}"
            ),
            Self::MismatchedDraggableKey { key, id } => {
                write!(f, "draggable stored under key {key} has id {id}")
            }
            Self::MismatchedDroppableKey { key, id } => {
                write!(f, "droppable stored under key {key} has id {id}")
            }
        }
    }
}

impl std::error::Error for DimensionError {}
