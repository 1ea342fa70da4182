//! ACEScc transfer function.
//!
//! ACEScc is a pure logarithmic encoding for colour grading in ACES.
//! Unlike ACEScct, it has no linear toe segment.
//!
//! # Range
//!
//! - Linear input: scene-referred, typically [0, 65504]
//! - Encoded output: approximately [-0.36, 1.47]
//!
//! # Reference
//!
//! AMPAS S-2014-003 - ACEScc specification

// ACEScc uses pure log2 with no linear toe
const MIN_VAL: f64 = 1.0 / 65536.0; // 2^-16, avoids log(0)

/// ACEScc encode: Converts ACES linear to ACEScc.
///
/// # Formula
///
/// ```text
/// if linear <= 0:
///     ACEScc = (log2(2^-16) + 9.72) / 17.52
/// else if linear < 2^-15:
///     ACEScc = (log2(2^-16 + linear * 0.5) + 9.72) / 17.52
/// else:
///     ACEScc = (log2(linear) + 9.72) / 17.52
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    const THRESHOLD: f64 = 1.0 / 32768.0; // 2^-15

    if linear <= 0.0 {
        (MIN_VAL.log2() + 9.72) / 17.52
    } else if linear < THRESHOLD {
        ((MIN_VAL + linear * 0.5).log2() + 9.72) / 17.52
    } else {
        (linear.log2() + 9.72) / 17.52
    }
}

/// ACEScc decode: Converts ACEScc to ACES linear.
///
/// # Formula
///
/// ```text
/// if ACEScc < (9.72 - 15) / 17.52:
///     linear = (2^(ACEScc * 17.52 - 9.72) - 2^-16) * 2
/// else:
///     linear = 2^(ACEScc * 17.52 - 9.72)
/// ```
#[inline]
pub fn decode(cc: f64) -> f64 {
    const THRESHOLD: f64 = (9.72 - 15.0) / 17.52;

    if cc < THRESHOLD {
        (2.0_f64.powf(cc * 17.52 - 9.72) - MIN_VAL) * 2.0
    } else {
        2.0_f64.powf(cc * 17.52 - 9.72)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        // ACEScc is undefined at exactly zero, so test from a small value
        let values = [0.001, 0.01, 0.18, 1.0, 10.0, 100.0];
        for &v in &values {
            let encoded = encode(v);
            let back = decode(encoded);
            assert!((v - back).abs() < 1e-9 * v.max(1.0), "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_midgray() {
        // 18% gray should encode to approximately 0.4135
        let encoded = encode(0.18);
        assert!((encoded - 0.4135).abs() < 0.001);
    }

    #[test]
    fn test_negative_clamp() {
        // Negative values clamp to the minimum encodable value
        let neg = encode(-1.0);
        let zero = encode(0.0);
        assert!((neg - zero).abs() < 1e-12);
    }
}
