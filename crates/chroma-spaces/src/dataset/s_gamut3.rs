//! S-Gamut3 colourspace.
//!
//! Sony's camera-native gamut, paired with the S-Log3 encoding.
//!
//! # Reference
//!
//! Sony S-Gamut3/S-Log3 Technical Summary

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::s_log3;

use crate::colourspace::{RgbColourspace, transfer};

/// S-Gamut3 primaries.
pub const S_GAMUT3_PRIMARIES: Primaries =
    Primaries::from_xy((0.7300, 0.2800), (0.1400, 0.8550), (0.1000, -0.0500));

/// S-Gamut3 colourspace (D65, S-Log3).
pub static S_GAMUT3: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "S-Gamut3",
            S_GAMUT3_PRIMARIES,
            wp,
            transfer(s_log3::encode),
            transfer(s_log3::decode),
        )
        .expect("S-Gamut3 dataset constants"),
    )
});
