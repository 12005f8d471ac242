//! Map, sort and collect operations.
//!
//! Every operation takes its input as `impl IntoIterator`, so passing
//! `&collection` converts borrowed elements and leaves the source untouched.
//! Each element goes through the conversion function exactly once.
//!
//! Sorting always uses the standard library's stable sort: elements that
//! compare equal keep the order they had before sorting.
//!
//! # Module Organization
//!
//! - this module: operations whose callables cannot fail
//! - [`fallible`]: `try_` twins taking `Result`-returning callables
//! - [`plan`]: [`ConversionPlan`], a runtime-configured conversion
//!
//! # Example
//!
//! ```
//! use convert_collection::convert::{convert_and_sort_list, convert_to_list};
//!
//! let users = [("Ana", 10), ("Pedro", 5), ("Beatriz", 19)];
//!
//! let names = convert_to_list(&users, |(name, _)| *name);
//! assert_eq!(names, ["Ana", "Pedro", "Beatriz"]);
//!
//! let points = convert_and_sort_list(&users, |(_, points)| *points, u32::cmp);
//! assert_eq!(points, [5, 10, 19]);
//! ```

pub mod fallible;
pub mod plan;

pub use plan::ConversionPlan;

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use indexmap::IndexSet;

use crate::container::{ListContainer, SetContainer};
use crate::logging::debug;

/// Convert every element into a container produced by `factory`.
///
/// Elements are pushed in the input's iteration order; what the container
/// does with them (keep, collapse, reorder) is up to the container.
pub fn convert_into<E, T, C, I, F, S>(input: I, convert: F, factory: S) -> C
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    C: Extend<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "convert_into", hint = items.size_hint().0, "converting");
    map_into(items, convert, factory())
}

/// Sort the source elements with `comparator`, then convert them in that
/// order into a container produced by `factory`.
pub fn sort_and_convert_into<E, T, C, I, F, P, S>(
    input: I,
    comparator: P,
    convert: F,
    factory: S,
) -> C
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> Ordering,
    F: FnMut(E) -> T,
    C: Extend<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "sort_and_convert_into", hint = items.size_hint().0, "converting");
    map_into(sorted(items, comparator).into_iter(), convert, factory())
}

/// Convert every element into a new `Vec`, keeping the input order.
pub fn convert_to_list<E, T, I, F>(input: I, convert: F) -> Vec<T>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
{
    let items = input.into_iter();
    debug!(op = "convert_to_list", hint = items.size_hint().0, "converting");
    items.map(convert).collect()
}

/// Convert every element into a list produced by `factory`.
///
/// ```
/// use std::collections::VecDeque;
/// use convert_collection::convert::convert_to_list_with;
///
/// let doubled: VecDeque<u32> = convert_to_list_with(&[1u32, 2, 3], |n| n * 2, VecDeque::new);
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub fn convert_to_list_with<E, T, C, I, F, S>(input: I, convert: F, factory: S) -> C
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    C: ListContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "convert_to_list_with", hint = items.size_hint().0, "converting");
    map_into(items, convert, factory())
}

/// Convert every element, then stably sort the results with `comparator`.
pub fn convert_and_sort_list<E, T, I, F, P>(input: I, convert: F, comparator: P) -> Vec<T>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    P: FnMut(&T, &T) -> Ordering,
{
    let items = input.into_iter();
    debug!(op = "convert_and_sort_list", hint = items.size_hint().0, "converting");
    sorted(items.map(convert), comparator)
}

/// [`convert_and_sort_list`] into a list produced by `factory`.
pub fn convert_and_sort_list_with<E, T, C, I, F, P, S>(
    input: I,
    convert: F,
    comparator: P,
    factory: S,
) -> C
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    P: FnMut(&T, &T) -> Ordering,
    C: ListContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "convert_and_sort_list_with", hint = items.size_hint().0, "converting");
    let mut out = factory();
    out.extend(sorted(items.map(convert), comparator));
    out
}

/// Stably sort the source elements with `comparator`, then convert them in
/// that order.
///
/// Useful when the source type has a meaningful order and the target type
/// does not.
pub fn sort_and_convert_list<E, T, I, F, P>(input: I, comparator: P, convert: F) -> Vec<T>
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> Ordering,
    F: FnMut(E) -> T,
{
    let items = input.into_iter();
    debug!(op = "sort_and_convert_list", hint = items.size_hint().0, "converting");
    sorted(items, comparator).into_iter().map(convert).collect()
}

/// [`sort_and_convert_list`] into a list produced by `factory`.
pub fn sort_and_convert_list_with<E, T, C, I, F, P, S>(
    input: I,
    comparator: P,
    convert: F,
    factory: S,
) -> C
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> Ordering,
    F: FnMut(E) -> T,
    C: ListContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "sort_and_convert_list_with", hint = items.size_hint().0, "converting");
    map_into(sorted(items, comparator).into_iter(), convert, factory())
}

/// Convert every element into a [`HashSet`], collapsing equal results.
///
/// The resulting set has no defined iteration order.
pub fn convert_to_set<E, T, I, F>(input: I, convert: F) -> HashSet<T>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    T: Hash + Eq,
{
    let items = input.into_iter();
    debug!(op = "convert_to_set", hint = items.size_hint().0, "converting");
    items.map(convert).collect()
}

/// Convert every element into a set produced by `factory`.
///
/// ```
/// use std::collections::BTreeSet;
/// use convert_collection::convert::convert_to_set_with;
///
/// let lengths = convert_to_set_with(["ab", "c", "de"], str::len, BTreeSet::new);
/// assert_eq!(lengths.into_iter().collect::<Vec<_>>(), [1, 2]);
/// ```
pub fn convert_to_set_with<E, T, C, I, F, S>(input: I, convert: F, factory: S) -> C
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    C: SetContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "convert_to_set_with", hint = items.size_hint().0, "converting");
    map_into(items, convert, factory())
}

/// Convert every element, stably sort the results, and keep them in an
/// insertion-ordered set.
///
/// Iteration follows the sort order. Of several equal results only the first
/// is kept, at its first position.
pub fn convert_and_sort_set<E, T, I, F, P>(input: I, convert: F, comparator: P) -> IndexSet<T>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    P: FnMut(&T, &T) -> Ordering,
    T: Hash + Eq,
{
    let items = input.into_iter();
    debug!(op = "convert_and_sort_set", hint = items.size_hint().0, "converting");
    sorted(items.map(convert), comparator).into_iter().collect()
}

/// Stably sort the source elements, convert them in that order, and keep the
/// results in an insertion-ordered set.
pub fn sort_and_convert_set<E, T, I, F, P>(input: I, comparator: P, convert: F) -> IndexSet<T>
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> Ordering,
    F: FnMut(E) -> T,
    T: Hash + Eq,
{
    let items = input.into_iter();
    debug!(op = "sort_and_convert_set", hint = items.size_hint().0, "converting");
    sorted(items, comparator).into_iter().map(convert).collect()
}

/// Convert every element into a [`BTreeSet`], iterated in ascending order.
///
/// Results that compare equal under `Ord` are duplicates even when they are
/// not otherwise identical; the first one converted is kept.
pub fn convert_and_sort_tree_set<E, T, I, F>(input: I, convert: F) -> BTreeSet<T>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> T,
    T: Ord,
{
    let items = input.into_iter();
    debug!(op = "convert_and_sort_tree_set", hint = items.size_hint().0, "converting");
    items.map(convert).collect()
}

fn map_into<E, T, C, J, F>(items: J, convert: F, mut out: C) -> C
where
    J: Iterator<Item = E>,
    F: FnMut(E) -> T,
    C: Extend<T>,
{
    out.extend(items.map(convert));
    out
}

fn sorted<E, J, P>(items: J, comparator: P) -> Vec<E>
where
    J: Iterator<Item = E>,
    P: FnMut(&E, &E) -> Ordering,
{
    let mut items: Vec<E> = items.collect();
    items.sort_by(comparator);
    items
}
