//! Don RGB 4 colourspace.
//!
//! <http://www.hutchcolor.com/profiles/DonRGB4.zip>

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// Don RGB 4 primaries.
pub const DON_RGB_4_PRIMARIES: Primaries = Primaries::from_xy(
    (0.69612068965517238, 0.29956896551724138),
    (0.21468298109010012, 0.7652947719688542),
    (0.12993762993762992, 0.035343035343035345),
);

/// Don RGB 4 colourspace (D50, gamma 2.2).
pub static DON_RGB_4: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Don RGB 4",
            DON_RGB_4_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.2)),
            transfer(|x| gamma_eotf(x, 2.2)),
        )
        .expect("Don RGB 4 dataset constants"),
    )
});
