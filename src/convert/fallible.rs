//! Conversions whose callables can fail.
//!
//! Each function mirrors the infallible operation of the same name without
//! the `try_` prefix. The conversion function returns `Result<T, X>` and the
//! comparator returns `Result<Ordering, X>`.
//!
//! The first failure aborts the whole call: no further element is converted,
//! no further comparison is made, and no partial result is returned. The
//! callable's error comes back untouched inside [`ConvertError::Conversion`]
//! or [`ConvertError::Comparison`].

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

use indexmap::IndexSet;

use crate::container::{ListContainer, SetContainer};
use crate::error::{ConvertError, Result};
use crate::logging::{debug, trace, warn};

/// Convert every element into a container produced by `factory`, stopping at
/// the first failure.
pub fn try_convert_into<E, T, X, C, I, F, S>(input: I, convert: F, factory: S) -> Result<C, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    C: Extend<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "try_convert_into", hint = items.size_hint().0, "converting");
    try_map_into(items, convert, factory())
}

/// Stably sort `items` with a comparator that may fail.
///
/// This is a top-down merge sort: on equal elements the left run wins, so
/// the relative order of ties is kept. It returns on the first comparator
/// failure.
pub fn try_sort_by<V, X, P>(items: Vec<V>, comparator: P) -> Result<Vec<V>, X>
where
    P: FnMut(&V, &V) -> std::result::Result<Ordering, X>,
{
    debug!(op = "try_sort_by", hint = items.len(), "sorting");
    try_sorted(items, comparator)
}

/// Fallible [`sort_and_convert_into`](super::sort_and_convert_into).
pub fn try_sort_and_convert_into<E, T, X, C, I, F, P, S>(
    input: I,
    comparator: P,
    convert: F,
    factory: S,
) -> Result<C, X>
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> std::result::Result<Ordering, X>,
    F: FnMut(E) -> std::result::Result<T, X>,
    C: Extend<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "try_sort_and_convert_into", hint = items.size_hint().0, "converting");
    let sorted = try_sorted(items.collect(), comparator)?;
    try_map_into(sorted.into_iter(), convert, factory())
}

/// Fallible [`convert_to_list`](super::convert_to_list).
pub fn try_convert_to_list<E, T, X, I, F>(input: I, convert: F) -> Result<Vec<T>, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
{
    let items = input.into_iter();
    debug!(op = "try_convert_to_list", hint = items.size_hint().0, "converting");
    try_map_into(items, convert, Vec::new())
}

/// Fallible [`convert_to_list_with`](super::convert_to_list_with).
pub fn try_convert_to_list_with<E, T, X, C, I, F, S>(
    input: I,
    convert: F,
    factory: S,
) -> Result<C, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    C: ListContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "try_convert_to_list_with", hint = items.size_hint().0, "converting");
    try_map_into(items, convert, factory())
}

/// Fallible [`convert_and_sort_list`](super::convert_and_sort_list).
pub fn try_convert_and_sort_list<E, T, X, I, F, P>(
    input: I,
    convert: F,
    comparator: P,
) -> Result<Vec<T>, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    P: FnMut(&T, &T) -> std::result::Result<Ordering, X>,
{
    let items = input.into_iter();
    debug!(op = "try_convert_and_sort_list", hint = items.size_hint().0, "converting");
    let converted = try_map_into(items, convert, Vec::new())?;
    try_sorted(converted, comparator)
}

/// Fallible [`convert_and_sort_list_with`](super::convert_and_sort_list_with).
pub fn try_convert_and_sort_list_with<E, T, X, C, I, F, P, S>(
    input: I,
    convert: F,
    comparator: P,
    factory: S,
) -> Result<C, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    P: FnMut(&T, &T) -> std::result::Result<Ordering, X>,
    C: ListContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "try_convert_and_sort_list_with", hint = items.size_hint().0, "converting");
    let converted = try_map_into(items, convert, Vec::new())?;
    let sorted = try_sorted(converted, comparator)?;
    let mut out = factory();
    out.extend(sorted);
    Ok(out)
}

/// Fallible [`sort_and_convert_list`](super::sort_and_convert_list).
pub fn try_sort_and_convert_list<E, T, X, I, F, P>(
    input: I,
    comparator: P,
    convert: F,
) -> Result<Vec<T>, X>
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> std::result::Result<Ordering, X>,
    F: FnMut(E) -> std::result::Result<T, X>,
{
    let items = input.into_iter();
    debug!(op = "try_sort_and_convert_list", hint = items.size_hint().0, "converting");
    let sorted = try_sorted(items.collect(), comparator)?;
    try_map_into(sorted.into_iter(), convert, Vec::new())
}

/// Fallible [`sort_and_convert_list_with`](super::sort_and_convert_list_with).
pub fn try_sort_and_convert_list_with<E, T, X, C, I, F, P, S>(
    input: I,
    comparator: P,
    convert: F,
    factory: S,
) -> Result<C, X>
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> std::result::Result<Ordering, X>,
    F: FnMut(E) -> std::result::Result<T, X>,
    C: ListContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "try_sort_and_convert_list_with", hint = items.size_hint().0, "converting");
    let sorted = try_sorted(items.collect(), comparator)?;
    try_map_into(sorted.into_iter(), convert, factory())
}

/// Fallible [`convert_to_set`](super::convert_to_set).
pub fn try_convert_to_set<E, T, X, I, F>(input: I, convert: F) -> Result<HashSet<T>, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    T: Hash + Eq,
{
    let items = input.into_iter();
    debug!(op = "try_convert_to_set", hint = items.size_hint().0, "converting");
    try_map_into(items, convert, HashSet::new())
}

/// Fallible [`convert_to_set_with`](super::convert_to_set_with).
pub fn try_convert_to_set_with<E, T, X, C, I, F, S>(
    input: I,
    convert: F,
    factory: S,
) -> Result<C, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    C: SetContainer<T>,
    S: FnOnce() -> C,
{
    let items = input.into_iter();
    debug!(op = "try_convert_to_set_with", hint = items.size_hint().0, "converting");
    try_map_into(items, convert, factory())
}

/// Fallible [`convert_and_sort_set`](super::convert_and_sort_set).
pub fn try_convert_and_sort_set<E, T, X, I, F, P>(
    input: I,
    convert: F,
    comparator: P,
) -> Result<IndexSet<T>, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    P: FnMut(&T, &T) -> std::result::Result<Ordering, X>,
    T: Hash + Eq,
{
    let items = input.into_iter();
    debug!(op = "try_convert_and_sort_set", hint = items.size_hint().0, "converting");
    let converted = try_map_into(items, convert, Vec::new())?;
    let sorted = try_sorted(converted, comparator)?;
    Ok(sorted.into_iter().collect())
}

/// Fallible [`sort_and_convert_set`](super::sort_and_convert_set).
pub fn try_sort_and_convert_set<E, T, X, I, F, P>(
    input: I,
    comparator: P,
    convert: F,
) -> Result<IndexSet<T>, X>
where
    I: IntoIterator<Item = E>,
    P: FnMut(&E, &E) -> std::result::Result<Ordering, X>,
    F: FnMut(E) -> std::result::Result<T, X>,
    T: Hash + Eq,
{
    let items = input.into_iter();
    debug!(op = "try_sort_and_convert_set", hint = items.size_hint().0, "converting");
    let sorted = try_sorted(items.collect(), comparator)?;
    try_map_into(sorted.into_iter(), convert, IndexSet::new())
}

/// Fallible [`convert_and_sort_tree_set`](super::convert_and_sort_tree_set).
pub fn try_convert_and_sort_tree_set<E, T, X, I, F>(
    input: I,
    convert: F,
) -> Result<BTreeSet<T>, X>
where
    I: IntoIterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    T: Ord,
{
    let items = input.into_iter();
    debug!(op = "try_convert_and_sort_tree_set", hint = items.size_hint().0, "converting");
    try_map_into(items, convert, BTreeSet::new())
}

fn try_map_into<E, T, X, C, J, F>(items: J, mut convert: F, mut out: C) -> Result<C, X>
where
    J: Iterator<Item = E>,
    F: FnMut(E) -> std::result::Result<T, X>,
    C: Extend<T>,
{
    for item in items {
        match convert(item) {
            Ok(value) => out.extend(Some(value)),
            Err(e) => {
                warn!("conversion function failed, aborting");
                return Err(ConvertError::Conversion(e));
            }
        }
    }
    Ok(out)
}

fn try_sorted<V, X, P>(items: Vec<V>, mut comparator: P) -> Result<Vec<V>, X>
where
    P: FnMut(&V, &V) -> std::result::Result<Ordering, X>,
{
    trace!(len = items.len(), "merge sorting");
    merge_sort(items, &mut comparator).map_err(|e| {
        warn!("comparator failed, aborting");
        ConvertError::Comparison(e)
    })
}

fn merge_sort<V, X, P>(mut items: Vec<V>, comparator: &mut P) -> std::result::Result<Vec<V>, X>
where
    P: FnMut(&V, &V) -> std::result::Result<Ordering, X>,
{
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, comparator)?;
    let right = merge_sort(right, comparator)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    // Only a strictly smaller right element jumps ahead.
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if comparator(r, l)? == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &&str) -> std::result::Result<i32, String> {
        s.parse::<i32>().map_err(|_| format!("not a number: {s}"))
    }

    #[test]
    fn test_try_convert_to_list_ok() {
        let out = try_convert_to_list(&["3", "1", "2"], parse).unwrap();
        assert_eq!(out, vec![3, 1, 2]);
    }

    #[test]
    fn test_conversion_failure_aborts() {
        let mut seen = Vec::new();
        let err = try_convert_to_list(&["1", "x", "3"], |s| {
            seen.push(*s);
            parse(s)
        })
        .unwrap_err();

        assert_eq!(err, ConvertError::Conversion("not a number: x".to_string()));
        assert_eq!(seen, vec!["1", "x"]);
    }

    #[test]
    fn test_try_sort_by_is_stable() {
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let sorted =
            try_sort_by(items, |a, b| Ok::<_, ()>(a.0.cmp(&b.0))).unwrap();
        assert_eq!(sorted, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_try_sort_by_matches_std_sort() {
        let items: Vec<i32> = vec![9, -3, 7, 7, 0, 12, -3, 5, 1, 8, 2];
        let mut expected = items.clone();
        expected.sort();
        let sorted = try_sort_by(items, |a, b| Ok::<_, ()>(a.cmp(b))).unwrap();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_comparison_failure_aborts() {
        let mut comparisons = 0;
        let err = try_convert_and_sort_list(&["2", "1", "3"], parse, |a, b| {
            comparisons += 1;
            if *a == 3 || *b == 3 {
                Err("cannot order 3".to_string())
            } else {
                Ok(a.cmp(b))
            }
        })
        .unwrap_err();

        assert!(err.is_comparison());
        assert_eq!(err.into_inner(), Some("cannot order 3".to_string()));
        assert!(comparisons >= 1);
    }

    #[test]
    fn test_no_comparison_after_failure() {
        let items: Vec<u32> = (0..16).rev().collect();
        for fail_at in 1..=10 {
            let mut calls = 0;
            let err = try_sort_by(items.clone(), |a, b| {
                calls += 1;
                if calls == fail_at {
                    Err(calls)
                } else {
                    Ok(a.cmp(b))
                }
            })
            .unwrap_err();

            assert_eq!(err, ConvertError::Comparison(fail_at));
            assert_eq!(calls, fail_at);
        }
    }

    #[test]
    fn test_conversion_failure_skips_comparator() {
        let mut compared = 0;
        let err = try_convert_and_sort_list(&["2", "x", "1"], parse, |a, b| {
            compared += 1;
            Ok(a.cmp(b))
        })
        .unwrap_err();
        assert!(err.is_conversion());
        assert_eq!(compared, 0);

        let mut compared = 0;
        let err = try_convert_and_sort_set(&["2", "1", "y"], parse, |a, b| {
            compared += 1;
            Ok(a.cmp(b))
        })
        .unwrap_err();
        assert_eq!(err, ConvertError::Conversion("not a number: y".to_string()));
        assert_eq!(compared, 0);
    }

    #[test]
    fn test_failed_source_sort_skips_conversion() {
        let mut converted = 0;
        let err = try_sort_and_convert_list(
            &["b", "a"],
            |_, _| Err("no order"),
            |s| {
                converted += 1;
                Ok(s.len())
            },
        )
        .unwrap_err();

        assert_eq!(err, ConvertError::Comparison("no order"));
        assert_eq!(converted, 0);
    }

    #[test]
    fn test_try_sets() {
        let set = try_convert_to_set(&["1", "01", "2"], parse).unwrap();
        assert_eq!(set.len(), 2);

        let linked =
            try_convert_and_sort_set(&["3", "1", "3", "2"], parse, |a, b| Ok(b.cmp(a))).unwrap();
        assert_eq!(linked.into_iter().collect::<Vec<_>>(), vec![3, 2, 1]);

        let linked = try_sort_and_convert_set(
            &["b", "a", "b"],
            |a, b| Ok::<_, String>(a.cmp(b)),
            |s| Ok(s.to_uppercase()),
        )
        .unwrap();
        assert_eq!(linked.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);

        let tree = try_convert_and_sort_tree_set(&["10", "2", "10"], parse).unwrap();
        assert_eq!(tree.into_iter().collect::<Vec<_>>(), vec![2, 10]);

        let set: IndexSet<i32> =
            try_convert_to_set_with(&["5", "4", "5"], parse, IndexSet::new).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![5, 4]);
    }

    #[test]
    fn test_try_list_with_factories() {
        use std::collections::VecDeque;

        let out: VecDeque<i32> = try_convert_to_list_with(&["1", "2"], parse, VecDeque::new).unwrap();
        assert_eq!(out, VecDeque::from(vec![1, 2]));

        let out: VecDeque<i32> =
            try_convert_and_sort_list_with(&["2", "1"], parse, |a, b| Ok(a.cmp(b)), VecDeque::new)
                .unwrap();
        assert_eq!(out, VecDeque::from(vec![1, 2]));

        let out: VecDeque<usize> = try_sort_and_convert_list_with(
            &["ccc", "a", "bb"],
            |a, b| Ok::<_, ()>(a.len().cmp(&b.len())),
            |s| Ok(s.len()),
            VecDeque::new,
        )
        .unwrap();
        assert_eq!(out, VecDeque::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_empty_input_never_calls_callables() {
        let empty: [&str; 0] = [];
        let out = try_convert_and_sort_list(&empty, |_| Err::<i32, _>("called"), |_, _| {
            Err("compared")
        })
        .unwrap();
        assert!(out.is_empty());

        let out = try_sort_and_convert_set(&empty, |_, _| Err("compared"), |_| {
            Err::<i32, _>("called")
        })
        .unwrap();
        assert!(out.is_empty());
    }
}
