#![forbid(unsafe_code)]

//! Test harness and reference fixtures for Dragline.
//!
//! - [`preset`]: the standard home / foreign / empty-foreign layout on either
//!   axis, plus helpers for measuring ad-hoc lists.
//! - [`trace`]: scripted pointer paths recorded as checksummed JSONL impact
//!   traces, for determinism and regression checks.

pub mod preset;
pub mod trace;

pub use preset::{DroppableWithDraggables, Preset, droppable_with_draggables, preset};
pub use trace::{ImpactTrace, TraceFrame, TraceMismatch, linear_path, record, verify_trace};
