//! Beta RGB colourspace.
//!
//! Bruce Lindbloom's optimised wide-gamut editing space.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Beta RGB primaries.
pub const BETA_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.6888, 0.3112), (0.1986, 0.7551), (0.1265, 0.0352));

/// Beta RGB colourspace (D50, gamma 2.2).
pub static BETA_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Beta RGB",
            BETA_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("Beta RGB dataset constants"),
    )
});
