#![forbid(unsafe_code)]

//! Logging shims.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros, and the crate root re-exports them again. Without it, the crate
//! root carries no-op macros with the same names, so call sites are written
//! once and never need `cfg` attributes:
//!
//! ```
//! use dragline_core::{debug, trace_span};
//!
//! let _span = trace_span!("drag_impact").entered();
//! debug!(droppable = "home", "resolved target");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Stand-in for `tracing::Span` when tracing is compiled out.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

impl NoopSpan {
    /// Mirrors `tracing::Span::entered`; the guard does nothing.
    #[inline]
    #[must_use]
    pub fn entered(self) -> NoopSpan {
        self
    }
}

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    macro_rules! info_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    macro_rules! warn_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    macro_rules! error_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}
