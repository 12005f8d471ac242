//! Convenient re-exports for common usage patterns.
//!
//! This module provides a single import to bring every conversion operation
//! and the container and error types into scope.
//!
//! # Example
//!
//! ```
//! use convert_collection::prelude::*;
//!
//! let scores = [("Ana", 10), ("Pedro", 5)];
//! let names = sort_and_convert_list(&scores, |a, b| a.1.cmp(&b.1), |(name, _)| *name);
//! assert_eq!(names, ["Pedro", "Ana"]);
//! ```

// Error handling
pub use crate::error::{ConvertError, Result};

// Containers
pub use crate::container::{Collected, ContainerKind, ListContainer, SetContainer};

// Infallible operations
pub use crate::convert::{
    ConversionPlan, convert_and_sort_list, convert_and_sort_list_with, convert_and_sort_set,
    convert_and_sort_tree_set, convert_into, convert_to_list, convert_to_list_with,
    convert_to_set, convert_to_set_with, sort_and_convert_into, sort_and_convert_list,
    sort_and_convert_list_with, sort_and_convert_set,
};

// Fallible operations
pub use crate::convert::fallible::{
    try_convert_and_sort_list, try_convert_and_sort_list_with, try_convert_and_sort_set,
    try_convert_and_sort_tree_set, try_convert_into, try_convert_to_list,
    try_convert_to_list_with, try_convert_to_set, try_convert_to_set_with, try_sort_and_convert_into,
    try_sort_and_convert_list, try_sort_and_convert_list_with, try_sort_and_convert_set,
    try_sort_by,
};

// Dependency re-exports
pub use indexmap::IndexSet;
