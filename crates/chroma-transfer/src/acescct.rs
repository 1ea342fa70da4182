//! ACEScct transfer function.
//!
//! ACEScct is the ACES grading encoding with a "toe": a linear segment
//! near black that behaves better under lift/gamma/gain controls than
//! the pure log of ACEScc.
//!
//! # Reference
//!
//! AMPAS S-2016-001 - ACEScct specification

// ACEScct constants
const X_BRK: f64 = 0.0078125; // 2^-7
const Y_BRK: f64 = 0.155251141552511; // evaluated at X_BRK
const A: f64 = 10.5402377416545;
const B: f64 = 0.0729055341958355;

/// ACEScct encode: Converts ACES linear to ACEScct.
///
/// # Formula
///
/// ```text
/// if linear <= 0.0078125:
///     ACEScct = A * linear + B
/// else:
///     ACEScct = (log2(linear) + 9.72) / 17.52
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    if linear <= X_BRK {
        A * linear + B
    } else {
        (linear.log2() + 9.72) / 17.52
    }
}

/// ACEScct decode: Converts ACEScct to ACES linear.
///
/// # Formula
///
/// ```text
/// if ACEScct <= Y_BRK:
///     linear = (ACEScct - B) / A
/// else:
///     linear = 2^(ACEScct * 17.52 - 9.72)
/// ```
#[inline]
pub fn decode(cct: f64) -> f64 {
    if cct <= Y_BRK {
        (cct - B) / A
    } else {
        2.0_f64.powf(cct * 17.52 - 9.72)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let values = [0.0, 0.001, 0.01, 0.18, 1.0, 10.0, 100.0];
        for &v in &values {
            let encoded = encode(v);
            let back = decode(encoded);
            assert!((v - back).abs() < 1e-9 * v.max(1.0), "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_midgray() {
        let encoded = encode(0.18);
        assert!((encoded - 0.4135).abs() < 0.001);
    }

    #[test]
    fn test_break_point() {
        // The toe and log segments meet at (X_BRK, Y_BRK)
        assert!((encode(X_BRK) - Y_BRK).abs() < 1e-12);
    }
}
