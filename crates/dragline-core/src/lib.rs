#![forbid(unsafe_code)]

//! Core: geometry primitives, the axis abstraction, and logging shims.
//!
//! # Role in Dragline
//! `dragline-core` is the leaf layer. It owns the value types every other
//! crate reasons with: page-space [`Position`]s, edge-described [`Rect`]s,
//! margin [`Sides`], and the [`Axis`] record that lets list logic ignore
//! whether a list runs top-to-bottom or left-to-right.
//!
//! # How it fits in the system
//! `dragline-impact` builds draggable/droppable dimensions out of these types
//! and computes drag impacts over them. Nothing here allocates or performs
//! I/O; every operation is a pure function of its inputs.

pub mod axis;
pub mod geometry;
pub mod logging;
pub mod position;

pub use axis::{Axis, Direction, HORIZONTAL, VERTICAL};
pub use geometry::{Edge, Extent, Rect, Sides};
pub use position::{Coord, Position, add, patch, subtract};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
