//! Display P3 colourspace.
//!
//! DCI-P3 primaries with a D65 whitepoint and the sRGB transfer, as used
//! by wide-gamut consumer displays.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::srgb;

use crate::colourspace::{RgbColourspace, transfer};

/// P3 primaries (shared with DCI-P3).
pub const DISPLAY_P3_PRIMARIES: Primaries =
    Primaries::from_xy((0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600));

/// Display P3 colourspace (D65, sRGB transfer).
pub static DISPLAY_P3: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Display P3",
            DISPLAY_P3_PRIMARIES,
            wp,
            transfer(srgb::oetf),
            transfer(srgb::eotf),
        )
        .expect("Display P3 dataset constants"),
    )
});
