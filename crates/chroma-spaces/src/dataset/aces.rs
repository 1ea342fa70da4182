//! ACES colourspaces.
//!
//! The Academy Color Encoding System family: the archival/interchange
//! space on AP0 primaries and the working/grading spaces on AP1.
//!
//! # References
//!
//! - SMPTE ST 2065-1 (ACES2065-1)
//! - AMPAS S-2014-004 (ACEScg), S-2014-003 (ACEScc), S-2016-001 (ACEScct)

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::{acescc, acescct};

use crate::colourspace::{RgbColourspace, linear, transfer};

/// ACES AP0 primaries, encompassing the entire visible gamut.
///
/// The blue primary sits below the spectral locus (negative y).
pub const ACES_AP0_PRIMARIES: Primaries =
    Primaries::from_xy((0.7347, 0.2653), (0.0000, 1.0000), (0.0001, -0.0770));

/// ACES AP1 primaries, the practical working gamut.
pub const ACES_AP1_PRIMARIES: Primaries =
    Primaries::from_xy((0.7130, 0.2930), (0.1650, 0.8300), (0.1280, 0.0440));

/// ACES2065-1: linear on AP0, the archival and interchange space.
pub static ACES_2065_1: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D60").expect("D60 whitepoint");
    Arc::new(
        RgbColourspace::new("ACES2065-1", ACES_AP0_PRIMARIES, wp, linear(), linear())
            .expect("ACES2065-1 dataset constants"),
    )
});

/// ACEScg: linear on AP1, the rendering and compositing working space.
pub static ACES_CG: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D60").expect("D60 whitepoint");
    Arc::new(
        RgbColourspace::new("ACEScg", ACES_AP1_PRIMARIES, wp, linear(), linear())
            .expect("ACEScg dataset constants"),
    )
});

/// ACEScc: pure-log encoding on AP1, for colour grading.
pub static ACES_CC: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D60").expect("D60 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "ACEScc",
            ACES_AP1_PRIMARIES,
            wp,
            transfer(acescc::encode),
            transfer(acescc::decode),
        )
        .expect("ACEScc dataset constants"),
    )
});

/// ACEScct: log-with-toe encoding on AP1, for colour grading.
pub static ACES_CCT: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D60").expect("D60 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "ACEScct",
            ACES_AP1_PRIMARIES,
            wp,
            transfer(acescct::encode),
            transfer(acescct::decode),
        )
        .expect("ACEScct dataset constants"),
    )
});

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_math::Vec3;

    #[test]
    fn test_aces_family_shares_whitepoint() {
        assert_eq!(ACES_2065_1.whitepoint(), ACES_CG.whitepoint());
        assert_eq!(ACES_CC.whitepoint(), ACES_CCT.whitepoint());
    }

    #[test]
    fn test_ap0_forward_matrix_golden() {
        // SMPTE ST 2065-1 published matrix, first column
        let m = ACES_2065_1.to_xyz_matrix();
        assert!((m.m[0][0] - 0.9525523959).abs() < 1e-6);
        assert!((m.m[1][0] - 0.3439664498).abs() < 1e-6);
        assert!(m.m[2][0].abs() < 1e-9);
    }

    #[test]
    fn test_white_has_unit_luminance() {
        for cs in [&ACES_2065_1, &ACES_CG, &ACES_CC, &ACES_CCT] {
            let white = cs.to_xyz(Vec3::ONE);
            assert!((white.y - 1.0).abs() < 1e-9, "{}", cs.name());
        }
    }
}
