use dragline_core::{Position, trace};

use crate::dimension::{DroppableDimension, DroppableDimensionMap};

/// The enabled droppable whose scrolled hit region contains `target`.
///
/// Disabled droppables are skipped before any containment test, so they can
/// never become a destination. When enabled droppables overlap, the smallest
/// id wins.
pub fn get_droppable_over(
    target: Position,
    droppables: &DroppableDimensionMap,
) -> Option<&DroppableDimension> {
    droppables
        .values()
        .filter(|droppable| {
            if !droppable.is_enabled {
                trace!(droppable = %droppable.id, "skipping disabled droppable");
                return false;
            }
            droppable.is_over(target)
        })
        .min_by(|a, b| a.id.cmp(&b.id))
}
