//! Error type for collection conversions.
//!
//! The converter never invents failures of its own beyond
//! [`ConvertError::InvalidArgument`]. Everything else is a failure raised by a
//! caller-supplied conversion function or comparator, carried back unchanged.

use std::convert::Infallible;

use thiserror::Error;

/// Failure of a single conversion call.
///
/// `X` is the error type of the caller's callables. Operations whose callables
/// cannot fail use the default, [`Infallible`].
///
/// # Example
///
/// ```
/// use convert_collection::convert::fallible::try_convert_to_list;
/// use convert_collection::ConvertError;
///
/// let parsed = try_convert_to_list(["1", "x", "3"], |s| s.parse::<u32>());
/// match parsed {
///     Err(ConvertError::Conversion(e)) => assert_eq!(e.to_string(), "invalid digit found in string"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError<X = Infallible> {
    /// A required argument was not supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The conversion function failed for some element.
    #[error("{0}")]
    Conversion(X),

    /// The comparator failed while sorting.
    #[error("{0}")]
    Comparison(X),
}

/// A [`Result`] type alias using [`ConvertError`].
pub type Result<T, X = Infallible> = std::result::Result<T, ConvertError<X>>;

impl<X> ConvertError<X> {
    /// Create an invalid-argument error from a message.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` if a required argument was missing.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if the conversion function failed.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion(_))
    }

    /// Returns `true` if the comparator failed.
    pub fn is_comparison(&self) -> bool {
        matches!(self, Self::Comparison(_))
    }

    /// The callable's own error, if this failure came from one.
    pub fn into_inner(self) -> Option<X> {
        match self {
            Self::Conversion(e) | Self::Comparison(e) => Some(e),
            Self::InvalidArgument(_) => None,
        }
    }

    /// Borrow the callable's own error, if this failure came from one.
    pub fn inner(&self) -> Option<&X> {
        match self {
            Self::Conversion(e) | Self::Comparison(e) => Some(e),
            Self::InvalidArgument(_) => None,
        }
    }
}
