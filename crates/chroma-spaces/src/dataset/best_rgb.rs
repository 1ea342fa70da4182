//! Best RGB colourspace.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Best RGB primaries.
pub const BEST_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.7347, 0.2653), (0.2150, 0.7750), (0.1300, 0.0350));

/// Best RGB colourspace (D50, gamma 2.2).
pub static BEST_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Best RGB",
            BEST_RGB_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("Best RGB dataset constants"),
    )
});
