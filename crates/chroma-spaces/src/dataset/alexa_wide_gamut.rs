//! ALEXA Wide Gamut colourspace.
//!
//! ARRI's camera-native gamut, paired with the LogC3 (EI 800) encoding.
//!
//! # Reference
//!
//! ARRI ALEXA Log C Curve documentation

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::logc;

use crate::colourspace::{RgbColourspace, transfer};

/// ALEXA Wide Gamut primaries.
pub const ALEXA_WIDE_GAMUT_PRIMARIES: Primaries =
    Primaries::from_xy((0.6840, 0.3130), (0.2210, 0.8480), (0.0861, -0.1020));

/// ALEXA Wide Gamut colourspace (D65, LogC3 EI 800).
pub static ALEXA_WIDE_GAMUT: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "ALEXA Wide Gamut",
            ALEXA_WIDE_GAMUT_PRIMARIES,
            wp,
            transfer(logc::encode),
            transfer(logc::decode),
        )
        .expect("ALEXA Wide Gamut dataset constants"),
    )
});
