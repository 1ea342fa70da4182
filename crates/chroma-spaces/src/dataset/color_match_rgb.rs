//! ColorMatch RGB colourspace.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// ColorMatch RGB primaries.
pub const COLOR_MATCH_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6300, 0.3400), (0.2950, 0.6050), (0.1500, 0.0750));

/// ColorMatch RGB colourspace (D50, gamma 1.8).
pub static COLOR_MATCH_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "ColorMatch RGB",
            COLOR_MATCH_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 1.8)),
            transfer(|x| gamma_eotf(x, 1.8)),
        )
        .expect("ColorMatch RGB dataset constants"),
    )
});
