//! Chromatic adaptation transforms (CAT).
//!
//! Adapting XYZ values between illuminants: a white object looks white under
//! both tungsten and daylight because the visual system rescales its cone
//! responses. A CAT models that rescaling as `M^-1 * diag(dst/src) * M`
//! where M maps XYZ into a cone-like response space.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - best overall accuracy (default choice)
//! - [`CAT02`] - from the CIECAM02 appearance model
//! - [`VON_KRIES`] - classic cone response model
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{adaptation_matrix, BRADFORD, D65_XYZ, D50_XYZ};
//!
//! let d65_to_d50 = adaptation_matrix(BRADFORD, D65_XYZ, D50_XYZ);
//! let xyz_d50 = d65_to_d50 * D65_XYZ;
//! assert!((xyz_d50.x - D50_XYZ.x).abs() < 1e-6);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ whitepoints, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65 in XYZ (daylight, ~6500K).
pub const D65_XYZ: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 in XYZ (horizon light, ~5000K).
pub const D50_XYZ: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D60 in XYZ (~6000K, close to the ACES white).
pub const D60_XYZ: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// CIE Standard Illuminant E in XYZ (equal energy).
pub const E_XYZ: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// ============================================================================
// Chromatic Adaptation Matrices
// ============================================================================

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a sharpened cone response space. Generally the best
/// method for cross-illuminant dataset work.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// CAT02 chromatic adaptation matrix (CIECAM02).
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Von Kries chromatic adaptation matrix (Hunt-Pointer-Estevez).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// Computes a chromatic adaptation matrix between two whitepoints.
///
/// The resulting matrix transforms XYZ values relative to `src_white` into
/// XYZ values relative to `dst_white`.
///
/// # Arguments
///
/// * `method` - the CAT matrix to use ([`BRADFORD`], [`CAT02`], [`VON_KRIES`])
/// * `src_white` - source whitepoint in XYZ
/// * `dst_white` - destination whitepoint in XYZ
pub fn adaptation_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    // The CAT matrices above are fixed and non-singular.
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    // Transform whitepoints to cone response space
    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    // M^-1 * S * M
    method_inv * scale * method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapt_maps_white_to_white() {
        let d65_to_d50 = adaptation_matrix(BRADFORD, D65_XYZ, D50_XYZ);
        let result = d65_to_d50 * D65_XYZ;
        assert!((result.x - D50_XYZ.x).abs() < 1e-9);
        assert!((result.y - D50_XYZ.y).abs() < 1e-9);
        assert!((result.z - D50_XYZ.z).abs() < 1e-9);
    }

    #[test]
    fn test_adapt_roundtrip() {
        let fwd = adaptation_matrix(BRADFORD, D65_XYZ, D50_XYZ);
        let rev = adaptation_matrix(BRADFORD, D50_XYZ, D65_XYZ);
        assert!((rev * fwd).max_deviation_from_identity() < 1e-12);
    }

    #[test]
    fn test_adapt_identity() {
        let same = adaptation_matrix(BRADFORD, D65_XYZ, D65_XYZ);
        assert!(same.max_deviation_from_identity() < 1e-12);
    }

    #[test]
    fn test_methods_agree_on_white() {
        for method in [BRADFORD, CAT02, VON_KRIES] {
            let m = adaptation_matrix(method, D65_XYZ, D60_XYZ);
            let result = m * D65_XYZ;
            assert!((result.x - D60_XYZ.x).abs() < 1e-9);
            assert!((result.z - D60_XYZ.z).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_d65_to_d50_bradford() {
        // Classic Bradford D65 -> D50 matrix (Lindbloom)
        let m = adaptation_matrix(BRADFORD, D65_XYZ, D50_XYZ);
        assert!((m.m[0][0] - 1.0478112).abs() < 1e-4);
        assert!((m.m[1][1] - 0.9904844).abs() < 1e-4);
        assert!((m.m[2][2] - 0.7521316).abs() < 1e-4);
    }
}
