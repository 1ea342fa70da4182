//! sRGB colourspace.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::srgb;

use crate::colourspace::{RgbColourspace, transfer};

/// sRGB / Rec.709 primaries.
pub const SRGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600));

/// sRGB colourspace (D65, IEC 61966-2-1 transfer).
pub static SRGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "sRGB",
            SRGB_PRIMARIES,
            wp,
            transfer(srgb::oetf),
            transfer(srgb::eotf),
        )
        .expect("sRGB dataset constants"),
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_matrix_golden() {
        // Red -> X coefficient of the published matrix
        let m = SRGB.to_xyz_matrix();
        assert!((m.m[0][0] - 0.4124564).abs() < 1e-6);
    }

    #[test]
    fn test_transfer_pair() {
        SRGB.validate_transfer_pair(256, 1e-9).unwrap();
    }
}
