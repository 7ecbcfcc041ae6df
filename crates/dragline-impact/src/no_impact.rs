//! The "nothing happened" impact.

use dragline_core::Position;

use crate::impact::{DragImpact, DragMovement};

/// Returned whenever a drag has no valid destination.
///
/// Hosts can compare against this value (or call [`DragImpact::is_none`])
/// instead of special-casing an error channel.
pub const NO_IMPACT: DragImpact = DragImpact {
    movement: DragMovement {
        draggables: Vec::new(),
        amount: Position::ORIGIN,
        is_beyond_start_position: false,
    },
    direction: None,
    destination: None,
};

impl DragImpact {
    /// The no-impact sentinel.
    #[inline]
    pub const fn none() -> DragImpact {
        NO_IMPACT
    }

    /// Whether this impact has no destination.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.destination.is_none()
    }
}

impl Default for DragImpact {
    fn default() -> Self {
        NO_IMPACT
    }
}
