//! CIE L* transfer function.
//!
//! The lightness curve of CIE 1976 L*a*b*, scaled to [0, 1]. Used by
//! ECI RGB v2, where encoded values are perceptually uniform lightness.
//!
//! # Reference
//!
//! CIE 15:2004, ECI RGB v2 specification

// CIE lightness constants, exact rational forms
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// L* encode: Linear reflectance to L*/100.
///
/// # Formula
///
/// ```text
/// if Y > epsilon:
///     V = (116 * Y^(1/3) - 16) / 100
/// else:
///     V = kappa * Y / 100
/// ```
#[inline]
pub fn encode(y: f64) -> f64 {
    if y > EPSILON {
        (116.0 * y.cbrt() - 16.0) / 100.0
    } else {
        KAPPA * y / 100.0
    }
}

/// L* decode: L*/100 to linear reflectance.
#[inline]
pub fn decode(v: f64) -> f64 {
    let lstar = v * 100.0;
    if lstar > KAPPA * EPSILON {
        ((lstar + 16.0) / 116.0).powi(3)
    } else {
        lstar / KAPPA
    }
}
