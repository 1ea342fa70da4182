//! NTSC RGB colourspace.
//!
//! The 1953 broadcast primaries, referenced to illuminant C.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// NTSC (1953) primaries.
pub const NTSC_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6700, 0.3300), (0.2100, 0.7100), (0.1400, 0.0800));

/// NTSC RGB colourspace (C, gamma 2.2).
pub static NTSC_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "C").expect("C whitepoint");
    Arc::new(
        RgbColourspace::new(
            "NTSC RGB",
            NTSC_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("NTSC RGB dataset constants"),
    )
});
