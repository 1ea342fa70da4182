//! SMPTE-C RGB colourspace.
//!
//! The SMPTE RP 145 primaries used by NTSC broadcast after 1987.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// SMPTE-C primaries.
pub const SMPTE_C_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6300, 0.3400), (0.3100, 0.5950), (0.1550, 0.0700));

/// SMPTE-C RGB colourspace (D65, gamma 2.2).
pub static SMPTE_C_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "SMPTE-C RGB",
            SMPTE_C_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("SMPTE-C RGB dataset constants"),
    )
});
