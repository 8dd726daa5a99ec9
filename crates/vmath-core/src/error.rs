//! Error types for vector parsing.
//!
//! The only fallible operations in this crate are the text parsers
//! ([`Vec2::from_delimited`](crate::Vec2::from_delimited),
//! [`Vec3::from_delimited`](crate::Vec3::from_delimited) and the `FromStr`
//! impls built on them). Arithmetic never fails: division by zero and
//! zero-length normalization follow IEEE semantics and propagate
//! infinities/NaN, as documented on the individual operations.
//!
//! # Usage
//!
//! ```rust
//! use vmath_core::Vec2;
//!
//! let err = Vec2::from_delimited("1,2,3", ',').unwrap_err();
//! assert!(err.is_count_error());
//! ```

use std::num::ParseFloatError;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing a vector from text.
///
/// Parsing is all-or-nothing: an `Err` means no vector was produced, never a
/// partially-filled one.
#[derive(Debug, Error)]
pub enum Error {
    /// Input was empty or contained only whitespace.
    #[error("empty input")]
    Empty,

    /// The input did not split into the required number of components.
    ///
    /// Reported both for too few fields (`"1,2"` parsed as a 3D vector) and
    /// too many (`"1,2,3"` parsed as a 2D vector).
    #[error("expected {expected} components, found {found}")]
    ComponentCount {
        /// Number of components the target type requires
        expected: usize,
        /// Number of delimited fields found in the input
        found: usize,
    },

    /// A component could not be parsed as a floating-point number.
    #[error("invalid component {index}: {text:?}")]
    InvalidComponent {
        /// Zero-based index of the offending field
        index: usize,
        /// The field text as it appeared in the input, whitespace trimmed
        text: String,
        /// The underlying float parse failure
        source: ParseFloatError,
    },
}

impl Error {
    /// Creates an [`Error::ComponentCount`] error.
    #[inline]
    pub fn component_count(expected: usize, found: usize) -> Self {
        Self::ComponentCount { expected, found }
    }

    /// Creates an [`Error::InvalidComponent`] error.
    #[inline]
    pub fn invalid_component(
        index: usize,
        text: impl Into<String>,
        source: ParseFloatError,
    ) -> Self {
        Self::InvalidComponent {
            index,
            text: text.into(),
            source,
        }
    }

    /// Returns `true` if this is a component-count error.
    #[inline]
    pub fn is_count_error(&self) -> bool {
        matches!(self, Self::ComponentCount { .. })
    }

    /// Returns `true` if this is a malformed-number error.
    #[inline]
    pub fn is_number_error(&self) -> bool {
        matches!(self, Self::InvalidComponent { .. })
    }
}
