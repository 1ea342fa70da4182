//! Error types for colourspace construction and lookup.
//!
//! All failures in this workspace are local and synchronous: they surface at
//! the point of matrix derivation, descriptor construction, or registry
//! lookup, and retrying a pure computation changes nothing. Registry name
//! errors ([`DuplicateColourspaceName`](Error::DuplicateColourspaceName),
//! [`UnknownColourspaceName`](Error::UnknownColourspaceName)) are ordinary
//! recoverable lookup failures; the rest are fatal to the colourspace being
//! constructed.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result};
//!
//! fn check_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::EmptyColourspaceName);
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving matrices, constructing colourspace
/// descriptors, or resolving names.
#[derive(Debug, Error)]
pub enum Error {
    /// A chromaticity with `y = 0` has no defined tristimulus values.
    ///
    /// Raised during xy to XYZ conversion of a primary or whitepoint. The
    /// conversion divides by `y`, so a zero denominator must fail here
    /// rather than propagate NaN or infinity into a derived matrix.
    #[error("degenerate chromaticity ({x}, {y}): y must be non-zero")]
    DegenerateChromaticity {
        /// x coordinate of the offending chromaticity
        x: f64,
        /// y coordinate of the offending chromaticity
        y: f64,
    },

    /// The primaries matrix cannot be inverted.
    ///
    /// Collinear or duplicate primaries produce a singular matrix; the
    /// whitepoint scaling solve has no solution.
    #[error("primaries are collinear or duplicated: matrix is singular")]
    SingularPrimaryMatrix,

    /// Supplied forward and inverse matrices are not mutual inverses.
    ///
    /// Raised when an externally supplied matrix pair fails the identity
    /// check beyond tolerance.
    #[error("forward and inverse matrices disagree: max deviation {max_deviation} from identity")]
    MatrixInverseMismatch {
        /// Largest absolute deviation of `forward * inverse` from identity
        max_deviation: f64,
    },

    /// A colourspace descriptor requires a non-empty name.
    #[error("colourspace name must not be empty")]
    EmptyColourspaceName,

    /// A colourspace (or alias) with this name is already registered.
    ///
    /// Names are compared case-insensitively; two names that collide only
    /// by case are rejected.
    #[error("colourspace name already registered: {0:?}")]
    DuplicateColourspaceName(String),

    /// No colourspace is registered under this name or alias.
    #[error("unknown colourspace: {0:?}")]
    UnknownColourspaceName(String),

    /// Encode/decode transfer functions fail the round-trip property.
    #[error("transfer functions are not mutual inverses: decode(encode({value})) = {roundtrip}")]
    InvalidTransferFunctionPair {
        /// Sample value that failed the round trip
        value: f64,
        /// What the round trip produced instead of `value`
        roundtrip: f64,
    },

    /// The illuminant table has no entry for this observer/illuminant pair.
    #[error("no whitepoint for illuminant {name:?} under the {observer} observer")]
    UnknownIlluminant {
        /// Standard observer the lookup ran under
        observer: String,
        /// Requested illuminant name
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::DegenerateChromaticity`] error.
    #[inline]
    pub fn degenerate(x: f64, y: f64) -> Self {
        Self::DegenerateChromaticity { x, y }
    }

    /// Creates an [`Error::DuplicateColourspaceName`] error.
    #[inline]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateColourspaceName(name.into())
    }

    /// Creates an [`Error::UnknownColourspaceName`] error.
    #[inline]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownColourspaceName(name.into())
    }

    /// Returns `true` if this is a registry name error (duplicate or unknown).
    ///
    /// Name errors are recoverable lookup failures; everything else is fatal
    /// to the colourspace being constructed.
    #[inline]
    pub fn is_name_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateColourspaceName(_) | Self::UnknownColourspaceName(_)
        )
    }

    /// Returns `true` if this is a numeric derivation error.
    #[inline]
    pub fn is_derivation_error(&self) -> bool {
        matches!(
            self,
            Self::DegenerateChromaticity { .. } | Self::SingularPrimaryMatrix
        )
    }
}
