//! Rec.2020 (BT.2020) transfer function.
//!
//! Same shape as the BT.709 OETF but with the higher-precision constants
//! from ITU-R BT.2020, chosen so the two segments meet exactly.
//!
//! # Reference
//!
//! ITU-R BT.2020-2

const ALPHA: f64 = 1.09929682680944;
const BETA: f64 = 0.018053968510807;

/// Rec.2020 OETF: Encodes linear to Rec.2020.
///
/// # Formula
///
/// ```text
/// if L < beta:
///     V = 4.5 * L
/// else:
///     V = alpha * L^0.45 - (alpha - 1)
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l < BETA {
        4.5 * l
    } else {
        ALPHA * l.powf(0.45) - (ALPHA - 1.0)
    }
}

/// Rec.2020 inverse OETF: Decodes Rec.2020 to linear.
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < 4.5 * BETA {
        v / 4.5
    } else {
        ((v + ALPHA - 1.0) / ALPHA).powf(1.0 / 0.45)
    }
}
