//! ROMM (ProPhoto RGB) transfer function.
//!
//! Gamma 1.8 with a linear segment below Et = 1/512, so the curve is
//! invertible at black.
//!
//! # Reference
//!
//! ANSI/I3A IT10.7666:2002 (ROMM RGB)

const ET: f64 = 1.0 / 512.0;

/// ROMM encode: Linear to ROMM RGB.
///
/// # Formula
///
/// ```text
/// if L < 1/512:
///     V = 16 * L
/// else:
///     V = L^(1/1.8)
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    if l < ET {
        16.0 * l
    } else {
        l.powf(1.0 / 1.8)
    }
}

/// ROMM decode: ROMM RGB to linear.
#[inline]
pub fn decode(v: f64) -> f64 {
    if v < 16.0 * ET {
        v / 16.0
    } else {
        v.powf(1.8)
    }
}
