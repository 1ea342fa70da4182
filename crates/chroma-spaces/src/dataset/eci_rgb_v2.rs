//! ECI RGB v2 colourspace.
//!
//! The European Color Initiative's prepress working space. Encoded values
//! are CIE L* lightness rather than a gamma curve.
//!
//! # Reference
//!
//! <http://www.eci.org>

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::lstar;

use crate::colourspace::{RgbColourspace, transfer};

/// ECI RGB v2 primaries.
pub const ECI_RGB_V2_PRIMARIES: Primaries =
    Primaries::from_xy((0.6700, 0.3300), (0.2100, 0.7100), (0.1400, 0.0800));

/// ECI RGB v2 colourspace (D50, L* transfer).
pub static ECI_RGB_V2: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "D50").expect("D50 whitepoint");
    Arc::new(
        RgbColourspace::new(
            "ECI RGB v2",
            ECI_RGB_V2_PRIMARIES,
            wp,
            transfer(lstar::encode),
            transfer(lstar::decode),
        )
        .expect("ECI RGB v2 dataset constants"),
    )
});
