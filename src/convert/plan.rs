//! Runtime-configured conversions.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use crate::container::{Collected, ContainerKind};
use crate::error::{ConvertError, Result};
use crate::logging::debug;

use super::{map_into, sorted};

type ConvertFn<'a, E, T> = Box<dyn FnMut(E) -> T + 'a>;
type CompareFn<'a, V> = Box<dyn FnMut(&V, &V) -> Ordering + 'a>;

enum SortStep<'a, E, T> {
    Unsorted,
    BeforeConvert(CompareFn<'a, E>),
    AfterConvert(CompareFn<'a, T>),
}

impl<E, T> SortStep<'_, E, T> {
    fn name(&self) -> &'static str {
        match self {
            SortStep::Unsorted => "unsorted",
            SortStep::BeforeConvert(_) => "sort-before-convert",
            SortStep::AfterConvert(_) => "sort-after-convert",
        }
    }
}

/// A conversion assembled step by step and run against any number of inputs.
///
/// The conversion function is required; the sort step and the container kind
/// are optional and default to no sorting and [`ContainerKind::List`].
///
/// The container kind is picked at run time, so [`run`](Self::run) needs
/// `T: Hash + Ord` for every kind, lists included. Element types without
/// those bounds go through the [`convert`](crate::convert) functions, which
/// only ask for what their container needs.
///
/// # Example
///
/// ```
/// use convert_collection::{ContainerKind, ConversionPlan};
///
/// let mut plan = ConversionPlan::new()
///     .convert(|n: &u32| n % 3)
///     .sort_after(|a: &u32, b: &u32| a.cmp(b))
///     .container(ContainerKind::LinkedSet);
///
/// let out = plan.run(&[5, 4, 3, 8])?;
/// assert_eq!(out.into_vec(), vec![0, 1, 2]);
/// # Ok::<(), convert_collection::ConvertError>(())
/// ```
pub struct ConversionPlan<'a, E, T> {
    convert: Option<ConvertFn<'a, E, T>>,
    sort: SortStep<'a, E, T>,
    container: ContainerKind,
}

impl<'a, E, T> ConversionPlan<'a, E, T> {
    /// Create a plan with no conversion function, no sorting and a list output.
    pub fn new() -> Self {
        Self {
            convert: None,
            sort: SortStep::Unsorted,
            container: ContainerKind::default(),
        }
    }

    /// Set the conversion function. Required.
    pub fn convert(mut self, f: impl FnMut(E) -> T + 'a) -> Self {
        self.convert = Some(Box::new(f));
        self
    }

    /// Sort source elements with `comparator` before converting them.
    ///
    /// Replaces any previously configured sort step.
    pub fn sort_before(mut self, comparator: impl FnMut(&E, &E) -> Ordering + 'a) -> Self {
        self.sort = SortStep::BeforeConvert(Box::new(comparator));
        self
    }

    /// Sort converted elements with `comparator`.
    ///
    /// Replaces any previously configured sort step.
    pub fn sort_after(mut self, comparator: impl FnMut(&T, &T) -> Ordering + 'a) -> Self {
        self.sort = SortStep::AfterConvert(Box::new(comparator));
        self
    }

    /// Drop any configured sort step.
    pub fn unsorted(mut self) -> Self {
        self.sort = SortStep::Unsorted;
        self
    }

    /// Choose the output container.
    pub fn container(mut self, kind: ContainerKind) -> Self {
        self.container = kind;
        self
    }

    pub fn container_kind(&self) -> ContainerKind {
        self.container
    }

    /// Run the plan over `input`.
    ///
    /// Fails with [`ConvertError::InvalidArgument`] when no conversion
    /// function was set.
    pub fn run<I>(&mut self, input: I) -> Result<Collected<T>>
    where
        I: IntoIterator<Item = E>,
        T: Hash + Ord,
    {
        let items = input.into_iter();
        debug!(
            op = "conversion_plan",
            hint = items.size_hint().0,
            sort = self.sort.name(),
            container = %self.container,
            "converting"
        );

        let convert = self
            .convert
            .as_mut()
            .ok_or_else(|| ConvertError::invalid_argument("no conversion function was set"))?;

        let items = match &mut self.sort {
            SortStep::Unsorted => map_into(items, convert, Vec::new()),
            SortStep::BeforeConvert(comparator) => {
                map_into(sorted(items, comparator).into_iter(), convert, Vec::new())
            }
            SortStep::AfterConvert(comparator) => sorted(items.map(convert), comparator),
        };

        Ok(self.container.collect(items))
    }
}

impl<E, T> Default for ConversionPlan<'_, E, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T> fmt::Debug for ConversionPlan<'_, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionPlan")
            .field("convert", &self.convert.is_some())
            .field("sort", &self.sort.name())
            .field("container", &self.container)
            .finish()
    }
}
