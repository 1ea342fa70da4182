//! # chroma-primaries
//!
//! Chromaticity primaries and RGB-XYZ matrix derivation.
//!
//! This crate holds the one reusable numeric routine every dataset module
//! is built on: deriving the normalised primary matrix (an RGB to XYZ
//! transform) from a colourspace's chromaticity primaries and its reference
//! whitepoint.
//!
//! # What are Primaries?
//!
//! Primaries define the gamut a colourspace can represent: the CIE xy
//! chromaticities of its red, green and blue reference colours. Together
//! with a whitepoint they fully determine the linear RGB to XYZ transform.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Chromaticity, illuminant};
//! use chroma_math::Vec3;
//! use chroma_primaries::{Primaries, normalised_primary_matrix};
//!
//! let srgb = Primaries::new(
//!     Chromaticity::new(0.64, 0.33),
//!     Chromaticity::new(0.30, 0.60),
//!     Chromaticity::new(0.15, 0.06),
//! );
//!
//! let m = normalised_primary_matrix(&srgb, illuminant::D65).unwrap();
//!
//! // Equal-energy RGB white maps to the whitepoint XYZ (Y = 1)
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-9);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - chromaticities, errors
//! - [`chroma-math`] - matrix operations
//!
//! # Used By
//!
//! - `chroma-spaces` - descriptor construction derives both matrices here

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_core::{Chromaticity, Error, Result};
use chroma_math::{Mat3, Vec3};

/// RGB colourspace primaries.
///
/// The CIE xy chromaticities of the red, green and blue reference colours.
///
/// # Example
///
/// ```rust
/// use chroma_core::Chromaticity;
/// use chroma_primaries::Primaries;
///
/// let srgb = Primaries::new(
///     Chromaticity::new(0.64, 0.33),
///     Chromaticity::new(0.30, 0.60),
///     Chromaticity::new(0.15, 0.06),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary chromaticity
    pub r: Chromaticity,
    /// Green primary chromaticity
    pub g: Chromaticity,
    /// Blue primary chromaticity
    pub b: Chromaticity,
}

impl Primaries {
    /// Creates a primaries triple.
    #[inline]
    pub const fn new(r: Chromaticity, g: Chromaticity, b: Chromaticity) -> Self {
        Self { r, g, b }
    }

    /// Creates primaries from three `(x, y)` pairs in R, G, B order.
    #[inline]
    pub const fn from_xy(r: (f64, f64), g: (f64, f64), b: (f64, f64)) -> Self {
        Self::new(
            Chromaticity::new(r.0, r.1),
            Chromaticity::new(g.0, g.1),
            Chromaticity::new(b.0, b.1),
        )
    }
}

/// Converts an xy chromaticity to XYZ tristimulus values with Y = 1.
///
/// # Formula
///
/// ```text
/// X = x / y,  Y = 1,  Z = (1 - x - y) / y
/// ```
///
/// Fails with [`Error::DegenerateChromaticity`] when `y` is zero: the
/// tristimulus values are undefined, and letting the division through
/// would propagate infinities into every derived matrix.
pub fn xy_to_xyz(c: Chromaticity) -> Result<Vec3> {
    if c.is_degenerate() {
        return Err(Error::degenerate(c.x, c.y));
    }
    Ok(Vec3::new(c.x / c.y, 1.0, c.z() / c.y))
}

/// Derives the normalised primary matrix (RGB to XYZ) for a set of
/// primaries under a whitepoint.
///
/// The returned matrix M satisfies two properties:
///
/// - `M * [1, 1, 1]` equals the whitepoint's XYZ tristimulus (Y = 1), so
///   equal-energy RGB white reproduces the reference white exactly;
/// - each column is the corresponding primary's XYZ tristimulus scaled by
///   the whitepoint solve, so primaries keep their own chromaticity.
///
/// # Algorithm
///
/// 1. Convert each primary and the whitepoint from xy to XYZ (Y = 1).
/// 2. Assemble the primaries' XYZ as columns of a matrix P.
/// 3. Solve `P * S = W` for the per-primary scaling column S.
/// 4. Return P with each column scaled by its component of S.
///
/// # Errors
///
/// - [`Error::DegenerateChromaticity`] - a primary or the whitepoint has
///   `y = 0`.
/// - [`Error::SingularPrimaryMatrix`] - collinear or duplicate primaries;
///   the solve has no solution. This is reported rather than silently
///   returning near-infinite values.
///
/// The computation is deterministic: identical inputs yield bit-identical
/// output, which the golden-value tests below rely on.
pub fn normalised_primary_matrix(primaries: &Primaries, whitepoint: Chromaticity) -> Result<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r)?;
    let g_xyz = xy_to_xyz(primaries.g)?;
    let b_xyz = xy_to_xyz(primaries.b)?;
    let w_xyz = xy_to_xyz(whitepoint)?;

    // Primaries as columns
    let p = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve P * S = W for the scaling column: S = P^-1 * W
    let p_inv = p.inverse().ok_or(Error::SingularPrimaryMatrix)?;
    let s = p_inv * w_xyz;

    Ok(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Derives the RGB to XYZ matrix. Alias for [`normalised_primary_matrix`].
#[inline]
pub fn rgb_to_xyz_matrix(primaries: &Primaries, whitepoint: Chromaticity) -> Result<Mat3> {
    normalised_primary_matrix(primaries, whitepoint)
}

/// Derives the XYZ to RGB matrix: the inverse of the normalised primary
/// matrix.
///
/// Fails with the same errors as [`normalised_primary_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries, whitepoint: Chromaticity) -> Result<Mat3> {
    normalised_primary_matrix(primaries, whitepoint)?
        .inverse()
        .ok_or(Error::SingularPrimaryMatrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::illuminant;

    const SRGB: Primaries = Primaries::from_xy((0.64, 0.33), (0.30, 0.60), (0.15, 0.06));
    const ACES_AP0: Primaries =
        Primaries::from_xy((0.7347, 0.2653), (0.0, 1.0), (0.0001, -0.0770));

    /// Published sRGB to XYZ (D65) matrix.
    const SRGB_TO_XYZ: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];

    /// Published ACES 2065-1 (AP0) to XYZ matrix, SMPTE ST 2065-1.
    const ACES_AP0_TO_XYZ: [[f64; 3]; 3] = [
        [0.9525523959, 0.0000000000, 0.0000936786],
        [0.3439664498, 0.7281660966, -0.0721325464],
        [0.0000000000, 0.0000000000, 1.0088251844],
    ];

    #[test]
    fn test_srgb_golden_matrix() {
        let m = normalised_primary_matrix(&SRGB, illuminant::D65).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (m.m[i][j] - SRGB_TO_XYZ[i][j]).abs() < 1e-6,
                    "m[{}][{}] = {}, expected {}",
                    i,
                    j,
                    m.m[i][j],
                    SRGB_TO_XYZ[i][j]
                );
            }
        }
        // Red -> X coefficient
        assert!((m.m[0][0] - 0.4124).abs() < 1e-4);
    }

    #[test]
    fn test_aces_ap0_golden_matrix() {
        let m = normalised_primary_matrix(&ACES_AP0, illuminant::ACES).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = ACES_AP0_TO_XYZ[i][j];
                // Published values reproduce to 6 significant digits
                let tol = expected.abs().max(1e-3) * 1e-6;
                assert!(
                    (m.m[i][j] - expected).abs() < tol,
                    "m[{}][{}] = {}, expected {}",
                    i,
                    j,
                    m.m[i][j],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_white_maps_to_whitepoint() {
        let m = normalised_primary_matrix(&SRGB, illuminant::D65).unwrap();
        let white = m * Vec3::ONE;
        let expected = xy_to_xyz(illuminant::D65).unwrap();
        assert!((white.x - expected.x).abs() < 1e-12);
        assert!((white.y - 1.0).abs() < 1e-12);
        assert!((white.z - expected.z).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        let to_xyz = rgb_to_xyz_matrix(&SRGB, illuminant::D65).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&SRGB, illuminant::D65).unwrap();

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);
        assert!((rgb.x - back.x).abs() < 1e-12);
        assert!((rgb.y - back.y).abs() < 1e-12);
        assert!((rgb.z - back.z).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_chromaticity() {
        let bad = Primaries::from_xy((0.64, 0.33), (0.30, 0.0), (0.15, 0.06));
        let err = normalised_primary_matrix(&bad, illuminant::D65).unwrap_err();
        assert!(matches!(err, Error::DegenerateChromaticity { .. }));
    }

    #[test]
    fn test_degenerate_whitepoint() {
        let err =
            normalised_primary_matrix(&SRGB, Chromaticity::new(0.5, 0.0)).unwrap_err();
        assert!(matches!(err, Error::DegenerateChromaticity { .. }));
    }

    #[test]
    fn test_collinear_primaries() {
        // All three primaries identical: singular, never NaN/Inf
        let bad = Primaries::from_xy((0.3, 0.3), (0.3, 0.3), (0.3, 0.3));
        let err = normalised_primary_matrix(&bad, illuminant::D65).unwrap_err();
        assert!(matches!(err, Error::SingularPrimaryMatrix));
    }

    #[test]
    fn test_determinism() {
        let a = normalised_primary_matrix(&ACES_AP0, illuminant::ACES).unwrap();
        let b = normalised_primary_matrix(&ACES_AP0, illuminant::ACES).unwrap();
        assert_eq!(a, b);
    }
}
