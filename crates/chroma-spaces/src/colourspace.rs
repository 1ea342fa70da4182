//! RGB colourspace descriptor.
//!
//! An [`RgbColourspace`] bundles everything a conversion routine needs to
//! know about a colourspace: its name, primaries, whitepoint, the derived
//! forward/inverse matrices, and the encode/decode transfer pair. It is
//! constructed once per dataset entry and immutable afterwards; the
//! registry shares it behind an `Arc`.
//!
//! # Example
//!
//! ```rust
//! use chroma_core::illuminant;
//! use chroma_math::Vec3;
//! use chroma_primaries::Primaries;
//! use chroma_spaces::{RgbColourspace, transfer};
//! use chroma_transfer::srgb;
//!
//! let cs = RgbColourspace::new(
//!     "sRGB",
//!     Primaries::from_xy((0.64, 0.33), (0.30, 0.60), (0.15, 0.06)),
//!     illuminant::D65,
//!     transfer(srgb::oetf),
//!     transfer(srgb::eotf),
//! )
//! .unwrap();
//!
//! let xyz = cs.to_xyz(Vec3::new(0.5, 0.5, 0.5));
//! let rgb = cs.from_xyz(xyz);
//! assert!((rgb.x - 0.5).abs() < 1e-12);
//! ```

use std::fmt;
use std::sync::Arc;

use chroma_core::{Chromaticity, Error, Result};
use chroma_math::{Mat3, Vec3};
use chroma_primaries::{Primaries, normalised_primary_matrix};

/// A shared unary transfer function value.
///
/// Transfer functions carry no state of their own; they are pure scalar
/// functions stored as shared function values so descriptors stay `Clone`
/// and `Send + Sync`.
pub type TransferFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Wraps a scalar function as a [`TransferFn`].
///
/// ```rust
/// use chroma_spaces::transfer;
///
/// let gamma22 = transfer(|x: f64| x.powf(1.0 / 2.2));
/// ```
pub fn transfer<F>(f: F) -> TransferFn
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The identity transfer function, for linearly encoded colourspaces.
pub fn linear() -> TransferFn {
    Arc::new(|x| x)
}

/// An immutable RGB colourspace descriptor.
///
/// Aggregates name, primaries, whitepoint, forward/inverse matrices and the
/// encode/decode transfer pair. Matrices are derived at construction, never
/// hand-authored, so the whitepoint invariant (`to_xyz * [1,1,1]` equals the
/// whitepoint's XYZ) holds for every instance built through
/// [`RgbColourspace::new`].
#[derive(Clone)]
pub struct RgbColourspace {
    name: String,
    primaries: Primaries,
    whitepoint: Chromaticity,
    to_xyz: Mat3,
    from_xyz: Mat3,
    encode: TransferFn,
    decode: TransferFn,
}

impl RgbColourspace {
    /// Tolerance for the forward/inverse mutual-inverse check.
    pub const INVERSE_TOLERANCE: f64 = 1e-6;

    /// Constructs a descriptor, deriving both matrices from the primaries
    /// and whitepoint.
    ///
    /// The inverse is recomputed internally rather than accepted from the
    /// caller, so a forward/inverse mismatch cannot be constructed through
    /// this path.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyColourspaceName`] - `name` is empty
    /// - [`Error::DegenerateChromaticity`] - a primary or the whitepoint has
    ///   `y = 0`
    /// - [`Error::SingularPrimaryMatrix`] - collinear primaries
    pub fn new(
        name: impl Into<String>,
        primaries: Primaries,
        whitepoint: Chromaticity,
        encode: TransferFn,
        decode: TransferFn,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyColourspaceName);
        }

        let to_xyz = normalised_primary_matrix(&primaries, whitepoint)?;
        let from_xyz = to_xyz.inverse().ok_or(Error::SingularPrimaryMatrix)?;

        Ok(Self {
            name,
            primaries,
            whitepoint,
            to_xyz,
            from_xyz,
            encode,
            decode,
        })
    }

    /// Constructs a descriptor from externally supplied matrices.
    ///
    /// Published standards sometimes fix their matrices to rounded values
    /// that differ in the last digits from a fresh derivation; this path
    /// accepts such a pair verbatim, but verifies the two matrices are
    /// mutual inverses within [`INVERSE_TOLERANCE`](Self::INVERSE_TOLERANCE).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyColourspaceName`] - `name` is empty
    /// - [`Error::MatrixInverseMismatch`] - `to_xyz * from_xyz` deviates
    ///   from identity beyond tolerance
    pub fn with_matrices(
        name: impl Into<String>,
        primaries: Primaries,
        whitepoint: Chromaticity,
        to_xyz: Mat3,
        from_xyz: Mat3,
        encode: TransferFn,
        decode: TransferFn,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyColourspaceName);
        }

        let max_deviation = (to_xyz * from_xyz).max_deviation_from_identity();
        if !max_deviation.is_finite() || max_deviation > Self::INVERSE_TOLERANCE {
            return Err(Error::MatrixInverseMismatch { max_deviation });
        }

        Ok(Self {
            name,
            primaries,
            whitepoint,
            to_xyz,
            from_xyz,
            encode,
            decode,
        })
    }

    /// The colourspace name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The chromaticity primaries.
    #[inline]
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// The whitepoint chromaticity.
    #[inline]
    pub fn whitepoint(&self) -> Chromaticity {
        self.whitepoint
    }

    /// The derived RGB to XYZ matrix.
    #[inline]
    pub fn to_xyz_matrix(&self) -> &Mat3 {
        &self.to_xyz
    }

    /// The derived XYZ to RGB matrix.
    #[inline]
    pub fn from_xyz_matrix(&self) -> &Mat3 {
        &self.from_xyz
    }

    /// Converts linear RGB to XYZ.
    #[inline]
    pub fn to_xyz(&self, rgb_linear: Vec3) -> Vec3 {
        self.to_xyz * rgb_linear
    }

    /// Converts XYZ to linear RGB.
    #[inline]
    pub fn from_xyz(&self, xyz: Vec3) -> Vec3 {
        self.from_xyz * xyz
    }

    /// Applies the encode transfer function elementwise.
    #[inline]
    pub fn encode(&self, rgb_linear: Vec3) -> Vec3 {
        rgb_linear.map(|v| (self.encode)(v))
    }

    /// Applies the decode transfer function elementwise.
    #[inline]
    pub fn decode(&self, rgb_encoded: Vec3) -> Vec3 {
        rgb_encoded.map(|v| (self.decode)(v))
    }

    /// Applies the encode transfer function to a scalar.
    #[inline]
    pub fn encode_value(&self, v: f64) -> f64 {
        (self.encode)(v)
    }

    /// Applies the decode transfer function to a scalar.
    #[inline]
    pub fn decode_value(&self, v: f64) -> f64 {
        (self.decode)(v)
    }

    /// The XYZ tristimulus the descriptor's equal-energy white maps to.
    ///
    /// For matrices derived through [`RgbColourspace::new`] this is the
    /// whitepoint's XYZ with Y = 1.
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        self.to_xyz * Vec3::ONE
    }

    /// Verifies that decode inverts encode over [0, 1].
    ///
    /// Samples `samples + 1` evenly spaced values and checks
    /// `decode(encode(v))` returns within `tolerance` of `v`. Fails with
    /// [`Error::InvalidTransferFunctionPair`] at the first violation.
    pub fn validate_transfer_pair(&self, samples: usize, tolerance: f64) -> Result<()> {
        for i in 0..=samples {
            let v = i as f64 / samples as f64;
            let roundtrip = (self.decode)((self.encode)(v));
            if !roundtrip.is_finite() || (roundtrip - v).abs() > tolerance {
                return Err(Error::InvalidTransferFunctionPair { value: v, roundtrip });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RgbColourspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RgbColourspace")
            .field("name", &self.name)
            .field("primaries", &self.primaries)
            .field("whitepoint", &self.whitepoint)
            .field("to_xyz", &self.to_xyz)
            .field("from_xyz", &self.from_xyz)
            .finish_non_exhaustive()
    }
}
