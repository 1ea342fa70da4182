//! Apple RGB colourspace.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Apple RGB primaries.
pub const APPLE_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6250, 0.3400), (0.2800, 0.5950), (0.1550, 0.0700));

/// Apple RGB colourspace (D65, gamma 1.8).
pub static APPLE_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Apple RGB",
            APPLE_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 1.8)),
            transfer(|x| gamma_eotf(x, 1.8)),
        )
        .expect("Apple RGB dataset constants"),
    )
});
