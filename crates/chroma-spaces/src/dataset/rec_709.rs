//! Rec. 709 colourspace.
//!
//! # Reference
//!
//! ITU-R BT.709-6

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::rec709;

use crate::colourspace::{RgbColourspace, transfer};

/// Rec. 709 primaries (identical to sRGB).
pub const REC_709_PRIMARIES: Primaries =
    Primaries::from_xy((0.6400, 0.3300), (0.3000, 0.6000), (0.1500, 0.0600));

/// Rec. 709 colourspace (D65, BT.709 OETF).
pub static REC_709: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Rec. 709",
            REC_709_PRIMARIES,
            wp,
            transfer(rec709::oetf),
            transfer(rec709::eotf),
        )
        .expect("Rec. 709 dataset constants"),
    )
});
