//! Collection conversion utilities.
//!
//! This library maps every element of an input collection through a
//! conversion function into a new output collection, optionally sorting the
//! source elements before conversion or the results after it, and lets the
//! caller pick the container that holds the results.
//!
//! # Quick Start
//!
//! ```
//! use convert_collection::prelude::*;
//!
//! struct User { name: String, points: u32 }
//!
//! let users = vec![
//!     User { name: "Ana".into(), points: 10 },
//!     User { name: "Pedro".into(), points: 5 },
//!     User { name: "Beatriz".into(), points: 19 },
//! ];
//!
//! // Convert, keeping input order
//! let names = convert_to_list(&users, |u| u.name.clone());
//! assert_eq!(names, ["Ana", "Pedro", "Beatriz"]);
//!
//! // Convert, then sort the results
//! let points = convert_and_sort_list(&users, |u| u.points, u32::cmp);
//! assert_eq!(points, [5, 10, 19]);
//!
//! // Collapse duplicates into an ascending set
//! let initials = convert_and_sort_tree_set(&users, |u| u.name.chars().next());
//! assert_eq!(initials.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`convert`] - The conversion operations, their fallible `try_` twins
//!   and [`ConversionPlan`]
//! - [`container`] - Container marker traits and runtime container selection
//! - [`error`] - [`ConvertError`] and the crate [`Result`] alias
//! - [`prelude`] - Convenient re-exports
//! - [`demo`] - Sample records, roster configuration and subscriber setup for
//!   the demo binary (requires `cli` feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the demo command-line binary
//! - `full` - Enable all features

#[macro_use]
mod logging;

pub mod container;
pub mod convert;
#[cfg(feature = "cli")]
pub mod demo;
pub mod error;
pub mod prelude;

// Re-export the error type
pub use error::{ConvertError, Result};

// Re-export container types at crate root for convenience
pub use container::{Collected, ContainerKind, ListContainer, ParseContainerKindError, SetContainer};

// Re-export the configured conversion builder
pub use convert::ConversionPlan;

// Re-export the insertion-ordered set used by the ordered set operations
pub use indexmap::IndexSet;
