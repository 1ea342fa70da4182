//! Adobe RGB (1998) colourspace.
//!
//! The gamma exponent is exactly 563/256, not 2.2.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{ADOBE_GAMMA, gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Adobe RGB (1998) primaries.
pub const ADOBE_RGB_1998_PRIMARIES: Primaries =
    Primaries::from_xy((0.6400, 0.3300), (0.2100, 0.7100), (0.1500, 0.0600));

/// Adobe RGB (1998) colourspace (D65, gamma 563/256).
pub static ADOBE_RGB_1998: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Adobe RGB (1998)",
            ADOBE_RGB_1998_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, ADOBE_GAMMA)),
            transfer(|x| gamma_eotf(x, ADOBE_GAMMA)),
        )
        .expect("Adobe RGB (1998) dataset constants"),
    )
});
