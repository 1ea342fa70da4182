//! DCI-P3 and DCI-P3+ colourspaces.
//!
//! The theatrical projection gamuts, with the greenish DCI whitepoint and
//! a pure 2.6 gamma.
//!
//! # Reference
//!
//! SMPTE RP 431-2

use std::sync::{Arc, LazyLock};

use chroma_core::{Observer, whitepoint};
use chroma_primaries::Primaries;
use chroma_transfer::gamma::{gamma_eotf, gamma_oetf};

use crate::colourspace::{RgbColourspace, transfer};

/// DCI-P3 primaries.
pub const DCI_P3_PRIMARIES: Primaries =
    Primaries::from_xy((0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600));

/// DCI-P3+ primaries, an extended variant with an imaginary blue.
pub const DCI_P3_P_PRIMARIES: Primaries =
    Primaries::from_xy((0.7400, 0.2700), (0.2200, 0.7800), (0.0900, -0.0900));

/// DCI-P3 colourspace (DCI white, gamma 2.6).
pub static DCI_P3: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "DCI").expect("DCI whitepoint");
    Arc::new(
        RgbColourspace::new(
            "DCI-P3",
            DCI_P3_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.6)),
            transfer(|x| gamma_eotf(x, 2.6)),
        )
        .expect("DCI-P3 dataset constants"),
    )
});

/// DCI-P3+ colourspace (DCI white, gamma 2.6).
pub static DCI_P3_P: LazyLock<Arc<RgbColourspace>> = LazyLock::new(|| {
    let wp = whitepoint(Observer::Cie1931TwoDegree, "DCI").expect("DCI whitepoint");
    Arc::new(
        RgbColourspace::new(
            "DCI-P3+",
            DCI_P3_P_PRIMARIES,
            wp,
            transfer(|x| gamma_oetf(x, 2.6)),
            transfer(|x| gamma_eotf(x, 2.6)),
        )
        .expect("DCI-P3+ dataset constants"),
    )
});
