//! Ekta Space PS 5 colourspace.
//!
//! Joseph Holmes' space for scanned Ektachrome film.

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Ekta Space PS 5 primaries.
pub const EKTA_SPACE_PS_5_PRIMARIES: Primaries =
    Primaries::from_xy((0.6950, 0.3050), (0.2600, 0.7000), (0.1100, 0.0050));

/// Ekta Space PS 5 colourspace (D50, gamma 2.2).
pub static EKTA_SPACE_PS_5: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Ekta Space PS 5",
            EKTA_SPACE_PS_5_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("Ekta Space PS 5 dataset constants"),
    )
});
