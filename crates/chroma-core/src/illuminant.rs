//! Standard illuminant whitepoints.
//!
//! Maps (standard observer, illuminant name) pairs to CIE xy whitepoint
//! chromaticities. Dataset modules pick their reference white from this
//! table; the table itself carries only the illuminants those datasets and
//! their tests consume, not a full colorimetric database.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Observer, whitepoint};
//!
//! let d65 = whitepoint(Observer::Cie1931TwoDegree, "D65").unwrap();
//! assert!((d65.x - 0.3127).abs() < 1e-4);
//! ```

use crate::{Chromaticity, Error, Result};
use std::fmt;

/// CIE standard observer.
///
/// Whitepoint chromaticities differ slightly between the 1931 2 degree and
/// 1964 10 degree colour matching functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Observer {
    /// CIE 1931 2 Degree Standard Observer.
    #[default]
    Cie1931TwoDegree,
    /// CIE 1964 10 Degree Standard Observer.
    Cie1964TenDegree,
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cie1931TwoDegree => write!(f, "CIE 1931 2 Degree"),
            Self::Cie1964TenDegree => write!(f, "CIE 1964 10 Degree"),
        }
    }
}

// CIE 1931 2 degree whitepoints

/// Illuminant A (tungsten, ~2856K).
pub const A: Chromaticity = Chromaticity::new(0.44757, 0.40745);

/// Illuminant B (direct sunlight, obsolete).
pub const B: Chromaticity = Chromaticity::new(0.34842, 0.35161);

/// Illuminant C (average daylight, obsolete).
pub const C: Chromaticity = Chromaticity::new(0.31006, 0.31616);

/// Illuminant D50 (horizon light, ~5000K).
pub const D50: Chromaticity = Chromaticity::new(0.34567, 0.35850);

/// Illuminant D55 (~5500K).
pub const D55: Chromaticity = Chromaticity::new(0.33242, 0.34743);

/// Illuminant D60 (~6000K).
pub const D60: Chromaticity = Chromaticity::new(0.32168, 0.33767);

/// Illuminant D65 (noon daylight, ~6500K).
pub const D65: Chromaticity = Chromaticity::new(0.31270, 0.32900);

/// Illuminant D75 (north sky daylight, ~7500K).
pub const D75: Chromaticity = Chromaticity::new(0.29902, 0.31485);

/// Illuminant E (equal energy).
pub const E: Chromaticity = Chromaticity::new(1.0 / 3.0, 1.0 / 3.0);

/// DCI whitepoint (theatrical projection, greenish ~6300K).
pub const DCI: Chromaticity = Chromaticity::new(0.31400, 0.35100);

/// ACES whitepoint (close to, but not exactly, D60).
pub const ACES: Chromaticity = Chromaticity::new(0.32168, 0.33767);

/// Looks up a whitepoint chromaticity by observer and illuminant name.
///
/// Names are matched case-insensitively. Fails with
/// [`Error::UnknownIlluminant`] for names the table does not carry.
pub fn whitepoint(observer: Observer, name: &str) -> Result<Chromaticity> {
    let wp = match observer {
        Observer::Cie1931TwoDegree => match name.to_uppercase().as_str() {
            "A" => Some(A),
            "B" => Some(B),
            "C" => Some(C),
            "D50" => Some(D50),
            "D55" => Some(D55),
            "D60" => Some(D60),
            "D65" => Some(D65),
            "D75" => Some(D75),
            "E" => Some(E),
            "DCI" | "DCI-P3" => Some(DCI),
            "ACES" => Some(ACES),
            _ => None,
        },
        Observer::Cie1964TenDegree => match name.to_uppercase().as_str() {
            "A" => Some(Chromaticity::new(0.45117, 0.40594)),
            "C" => Some(Chromaticity::new(0.31039, 0.31905)),
            "D50" => Some(Chromaticity::new(0.34773, 0.35952)),
            "D55" => Some(Chromaticity::new(0.33411, 0.34877)),
            "D65" => Some(Chromaticity::new(0.31382, 0.33100)),
            "D75" => Some(Chromaticity::new(0.29968, 0.31740)),
            "E" => Some(E),
            _ => None,
        },
    };
    wp.ok_or_else(|| Error::UnknownIlluminant {
        observer: observer.to_string(),
        name: name.to_string(),
    })
}
