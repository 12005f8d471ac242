//! Output container kinds.
//!
//! Conversions write into any container the caller hands them. The marker
//! traits [`ListContainer`] and [`SetContainer`] keep the list and set
//! operations honest about what they return, and [`ContainerKind`] /
//! [`Collected`] cover the case where the container is picked at runtime.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::str::FromStr;

use indexmap::IndexSet;

/// A container that keeps every pushed element, in push order.
pub trait ListContainer<T>: Extend<T> {}

impl<T> ListContainer<T> for Vec<T> {}
impl<T> ListContainer<T> for VecDeque<T> {}
impl<T> ListContainer<T> for LinkedList<T> {}

/// A container that collapses equal elements to a single occurrence.
///
/// Iteration order depends on the implementation: none for [`HashSet`],
/// first-seen for [`IndexSet`], ascending for [`BTreeSet`].
pub trait SetContainer<T>: Extend<T> {}

impl<T: Hash + Eq, S: BuildHasher> SetContainer<T> for HashSet<T, S> {}
impl<T: Hash + Eq, S: BuildHasher> SetContainer<T> for IndexSet<T, S> {}
impl<T: Ord> SetContainer<T> for BTreeSet<T> {}

/// Container selected by configuration rather than by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerKind {
    /// Insertion-ordered list (`Vec`).
    #[default]
    List,
    /// Hash-based set with no defined order.
    HashSet,
    /// Insertion-ordered set.
    LinkedSet,
    /// Set iterated in ascending natural order.
    TreeSet,
}

impl ContainerKind {
    /// Every supported kind.
    pub const ALL: [ContainerKind; 4] = [
        ContainerKind::List,
        ContainerKind::HashSet,
        ContainerKind::LinkedSet,
        ContainerKind::TreeSet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::List => "list",
            ContainerKind::HashSet => "hash-set",
            ContainerKind::LinkedSet => "linked-set",
            ContainerKind::TreeSet => "tree-set",
        }
    }

    /// Whether this container collapses duplicates.
    pub fn is_set(&self) -> bool {
        !matches!(self, ContainerKind::List)
    }

    /// Whether iteration order reflects the order elements were produced in.
    pub fn preserves_order(&self) -> bool {
        matches!(self, ContainerKind::List | ContainerKind::LinkedSet)
    }

    /// Collect `items` into an empty container of this kind.
    ///
    /// The kind is only known at run time, so `T` must satisfy the bounds of
    /// every kind (`Hash` for the hash-based sets, `Ord` for the tree set)
    /// even when `self` is [`ContainerKind::List`].
    pub fn collect<T, I>(self, items: I) -> Collected<T>
    where
        T: Hash + Ord,
        I: IntoIterator<Item = T>,
    {
        match self {
            ContainerKind::List => Collected::List(items.into_iter().collect()),
            ContainerKind::HashSet => Collected::HashSet(items.into_iter().collect()),
            ContainerKind::LinkedSet => Collected::LinkedSet(items.into_iter().collect()),
            ContainerKind::TreeSet => Collected::TreeSet(items.into_iter().collect()),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown container kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown container kind '{0}' (expected list, hash-set, linked-set or tree-set)")]
pub struct ParseContainerKindError(String);

impl FromStr for ContainerKind {
    type Err = ParseContainerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContainerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseContainerKindError(s.to_string()))
    }
}

/// A converted collection whose container was chosen with [`ContainerKind`].
#[derive(Debug, Clone)]
pub enum Collected<T> {
    List(Vec<T>),
    HashSet(HashSet<T>),
    LinkedSet(IndexSet<T>),
    TreeSet(BTreeSet<T>),
}

impl<T> Collected<T> {
    pub fn kind(&self) -> ContainerKind {
        match self {
            Collected::List(_) => ContainerKind::List,
            Collected::HashSet(_) => ContainerKind::HashSet,
            Collected::LinkedSet(_) => ContainerKind::LinkedSet,
            Collected::TreeSet(_) => ContainerKind::TreeSet,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Collected::List(v) => v.len(),
            Collected::HashSet(s) => s.len(),
            Collected::LinkedSet(s) => s.len(),
            Collected::TreeSet(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate in the container's own order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Collected::List(v) => Box::new(v.iter()),
            Collected::HashSet(s) => Box::new(s.iter()),
            Collected::LinkedSet(s) => Box::new(s.iter()),
            Collected::TreeSet(s) => Box::new(s.iter()),
        }
    }

    /// Flatten into a `Vec`, keeping the container's iteration order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Collected::List(v) => v,
            Collected::HashSet(s) => s.into_iter().collect(),
            Collected::LinkedSet(s) => s.into_iter().collect(),
            Collected::TreeSet(s) => s.into_iter().collect(),
        }
    }
}
