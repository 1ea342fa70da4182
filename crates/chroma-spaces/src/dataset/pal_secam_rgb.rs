//! PAL/SECAM RGB colourspace.
//!
//! EBU Tech. 3213 primaries with the assumed 2.8 display gamma.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// PAL/SECAM primaries.
pub const PAL_SECAM_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6400, 0.3300), (0.2900, 0.6000), (0.1500, 0.0600));

/// PAL/SECAM RGB colourspace (D65, gamma 2.8).
pub static PAL_SECAM_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "PAL/SECAM RGB",
            PAL_SECAM_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.8)),
            transfer(|x| gamma_eotf(x, 2.8)),
        )
        .expect("PAL/SECAM RGB dataset constants"),
    )
});
