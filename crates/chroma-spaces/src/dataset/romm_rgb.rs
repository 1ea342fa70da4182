//! ProPhoto RGB (ROMM RGB) colourspace.
//!
//! Kodak's Reference Output Medium Metric space; very wide gamut with two
//! imaginary primaries, common in photographic archiving.
//!
//! # Reference
//!
//! ANSI/I3A IT10.7666:2002

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::romm;

use crate::colourspace::{RgbColourspace, transfer};

/// ProPhoto RGB / ROMM RGB primaries.
pub const PROPHOTO_RGB_PRIMARIES: Primaries =
    Primaries::from_xy((0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001));

/// ProPhoto RGB colourspace (D50, ROMM transfer).
pub static PROPHOTO_RGB: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "ProPhoto RGB",
            PROPHOTO_RGB_PRIMARIES,
            wp,
            transfer(romm::encode),
            transfer(romm::decode),
        )
        .expect("ProPhoto RGB dataset constants"),
    )
});
