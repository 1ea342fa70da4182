//! V-Gamut colourspace.
//!
//! Panasonic's camera-native gamut, paired with the V-Log encoding.
//!
//! # Reference
//!
//! Panasonic V-Log/V-Gamut Technical Documentation

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::v_log;

use crate::colourspace::{RgbColourspace, transfer};

/// V-Gamut primaries.
pub const V_GAMUT_PRIMARIES: Primaries =
    Primaries::from_xy((0.7300, 0.2800), (0.1650, 0.8400), (0.1000, -0.0300));

/// V-Gamut colourspace (D65, V-Log).
pub static V_GAMUT: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "V-Gamut",
            V_GAMUT_PRIMARIES,
            wp,
            transfer(v_log::encode),
            transfer(v_log::decode),
        )
        .expect("V-Gamut dataset constants"),
    )
});
