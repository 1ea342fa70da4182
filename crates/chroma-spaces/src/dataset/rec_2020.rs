//! Rec. 2020 colourspace.
//!
//! The UHDTV wide gamut. Uses the BT.2020 OETF with the high-precision
//! segment constants rather than the rounded BT.709 ones.
//!
//! # Reference
//!
//! ITU-R BT.2020-2

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::rec2020;

use crate::colourspace::{RgbColourspace, transfer};

/// Rec. 2020 primaries.
pub const REC_2020_PRIMARIES: Primaries =
    Primaries::from_xy((0.7080, 0.2920), (0.1700, 0.7970), (0.1310, 0.0460));

/// Rec. 2020 colourspace (D65, BT.2020 OETF).
pub static REC_2020: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D65").expect("D65 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "Rec. 2020",
            REC_2020_PRIMARIES,
            wp,
            transfer(rec2020::oetf),
            transfer(rec2020::eotf),
        )
        .expect("Rec. 2020 dataset constants"),
    )
});
