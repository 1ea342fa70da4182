//! Adobe Wide Gamut RGB colourspace.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{ADOBE_GAMMA, gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Adobe Wide Gamut RGB primaries.
pub const ADOBE_WIDE_GAMUT_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.7347, 0.2653), (0.1152, 0.8264), (0.1566, 0.0177));

/// Adobe Wide Gamut RGB colourspace (D50, gamma 563/256).
pub static ADOBE_WIDE_GAMUT_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Adobe Wide Gamut RGB",
            ADOBE_WIDE_GAMUT_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, ADOBE_GAMMA)),
            transfer(|x| gamma_eotf(x, ADOBE_GAMMA)),
        )
        .expect("Adobe Wide Gamut RGB dataset constants"),
    )
});
