#![forbid(unsafe_code)]

//! Replayable impact traces.
//!
//! A trace records the impact computed at every step of a scripted pointer
//! path. Traces serialize to JSONL with one frame per line, and every frame
//! carries a BLAKE3 checksum of its impact so two runs (or two builds) can be
//! compared frame by frame:
//!
//! ```json
//! {"step":0,"pointer":{"x":50.0,"y":40.0},"impact":{...},"checksum":"blake3:..."}
//! ```

use std::fmt;

use dragline_core::{Position, add, subtract};
use dragline_impact::{DimensionError, DimensionSnapshot, DragImpact, DraggableId};
use serde::{Deserialize, Serialize};
use tracing::info_span;

/// Checksum prefix for clarity in logs.
const CHECKSUM_PREFIX: &str = "blake3:";

/// Checksum of one impact's canonical JSON form.
pub fn compute_impact_checksum(impact: &DragImpact) -> String {
    let bytes = serde_json::to_vec(impact).expect("impacts always serialize");
    format!("{CHECKSUM_PREFIX}{}", blake3::hash(&bytes).to_hex())
}

/// One pointer sample and the impact it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub step: usize,
    pub pointer: Position,
    pub impact: DragImpact,
    pub checksum: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactTrace {
    pub draggable: DraggableId,
    pub frames: Vec<TraceFrame>,
}

impl ImpactTrace {
    /// Frame checksums in order.
    pub fn checksums(&self) -> Vec<String> {
        self.frames
            .iter()
            .map(|frame| frame.checksum.clone())
            .collect()
    }

    /// One JSON object per frame, newline separated.
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for frame in &self.frames {
            out.push_str(&serde_json::to_string(frame).expect("frames always serialize"));
            out.push('\n');
        }
        out
    }

    /// Parse frames written by [`ImpactTrace::to_jsonl`].
    pub fn from_jsonl(draggable: DraggableId, jsonl: &str) -> serde_json::Result<Self> {
        let frames = jsonl
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str)
            .collect::<serde_json::Result<Vec<TraceFrame>>>()?;
        Ok(Self { draggable, frames })
    }
}

/// Record the impact at each pointer in `path`.
pub fn record(
    snapshot: &DimensionSnapshot,
    draggable: &DraggableId,
    path: impl IntoIterator<Item = Position>,
) -> Result<ImpactTrace, DimensionError> {
    let _span = info_span!("impact_trace", draggable = %draggable).entered();
    let frames = path
        .into_iter()
        .enumerate()
        .map(|(step, pointer)| {
            let impact = snapshot.compute_impact(pointer, draggable)?;
            Ok(TraceFrame {
                step,
                pointer,
                checksum: compute_impact_checksum(&impact),
                impact,
            })
        })
        .collect::<Result<Vec<_>, DimensionError>>()?;
    tracing::debug!(frames = frames.len(), "recorded impact trace");
    Ok(ImpactTrace {
        draggable: draggable.clone(),
        frames,
    })
}

/// `steps + 1` evenly spaced points from `from` to `to`, both included.
pub fn linear_path(from: Position, to: Position, steps: usize) -> Vec<Position> {
    if steps == 0 {
        return vec![from];
    }
    let delta = subtract(to, from);
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            add(from, Position::new(delta.x * t, delta.y * t))
        })
        .collect()
}

/// Where a replayed trace first departs from a recorded one.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceMismatch {
    /// A frame's impact checksum differs.
    Frame {
        step: usize,
        pointer: Position,
        actual: String,
        expected: String,
    },
    /// Every shared frame agrees but one trace is longer.
    FrameCount { actual: usize, expected: usize },
}

impl fmt::Display for TraceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame {
                step,
                pointer,
                actual,
                expected,
            } => write!(
                f,
                "frame {step} at ({}, {}): impact {actual}, expected {expected}",
                pointer.x, pointer.y
            ),
            Self::FrameCount { actual, expected } => {
                write!(f, "trace has {actual} frames, expected {expected}")
            }
        }
    }
}

impl std::error::Error for TraceMismatch {}

/// Check `trace` frame by frame against previously recorded checksums.
pub fn verify_trace(trace: &ImpactTrace, expected: &[String]) -> Result<(), TraceMismatch> {
    for (frame, expected) in trace.frames.iter().zip(expected) {
        if frame.checksum != *expected {
            let mismatch = TraceMismatch::Frame {
                step: frame.step,
                pointer: frame.pointer,
                actual: frame.checksum.clone(),
                expected: expected.clone(),
            };
            tracing::warn!(draggable = %trace.draggable, %mismatch, "impact trace diverged");
            return Err(mismatch);
        }
    }
    if trace.frames.len() != expected.len() {
        return Err(TraceMismatch::FrameCount {
            actual: trace.frames.len(),
            expected: expected.len(),
        });
    }
    Ok(())
}
