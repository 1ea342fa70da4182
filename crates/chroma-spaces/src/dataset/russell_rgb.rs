//! Russell RGB colourspace.
//!
//! <http://www.russellcottrell.com/photo/RussellRGB.htm>

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Russell RGB primaries.
pub const RUSSELL_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6900, 0.3100), (0.1800, 0.7700), (0.1000, 0.0200));

/// Russell RGB colourspace (D55, gamma 2.2).
pub static RUSSELL_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D55").expect("D55 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Russell RGB",
            RUSSELL_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("Russell RGB dataset constants"),
    )
});
