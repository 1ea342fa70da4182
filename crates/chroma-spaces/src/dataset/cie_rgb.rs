//! CIE RGB colourspace.
//!
//! The 1931 primaries, referenced to the equal-energy illuminant E.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// CIE RGB primaries.
pub const CIE_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.7350, 0.2650), (0.2740, 0.7170), (0.1670, 0.0090));

/// CIE RGB colourspace (E, gamma 2.2).
pub static CIE_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "E").expect("E whitepoint");
    Arc::new(
        RgbColourspace::new(
            "CIE RGB",
            CIE_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("CIE RGB dataset constants"),
    )
});
