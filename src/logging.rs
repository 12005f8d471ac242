//! Feature-gated tracing macros for the conversion operations.
//!
//! With the `logging` feature the macros forward to `tracing`; without it they
//! expand to nothing, so the hot map/sort loops carry no logging cost.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::logging::debug;
//!
//! debug!(op = "convert_to_list", hint = input_hint, "converting");
//! ```

/// Per-element detail (sort comparisons, individual conversions).
#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { tracing::trace!(target: "convert_collection", $($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// One event per operation call.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!(target: "convert_collection", $($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// A caller-supplied callable failed; the failure is about to be returned.
#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { tracing::warn!(target: "convert_collection", $($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub(crate) use log_debug as debug;
pub(crate) use log_trace as trace;
pub(crate) use log_warn as warn;
