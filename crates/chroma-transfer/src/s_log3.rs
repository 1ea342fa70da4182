//! Sony S-Log3 transfer function.
//!
//! Sony's logarithmic camera encoding, approximately 14 stops of
//! dynamic range.
//!
//! # Reference
//!
//! Sony S-Log3 Technical Summary

// S-Log3 constants
const CUT: f64 = 0.01125;
const CUT_CV: f64 = 171.2102946929;

/// S-Log3 encode: Linear scene light to S-Log3.
#[inline]
pub fn encode(linear: f64) -> f64 {
    if linear >= CUT {
        // 0.19 = 0.18 + 0.01, so 18% gray maps to 420/1023
        (420.0 + 261.5 * ((linear + 0.01) / 0.19).log10()) / 1023.0
    } else {
        (linear * (CUT_CV - 95.0) / CUT + 95.0) / 1023.0
    }
}

/// S-Log3 decode: S-Log3 to linear scene light.
#[inline]
pub fn decode(log: f64) -> f64 {
    let x = log * 1023.0;
    if x >= CUT_CV {
        10.0_f64.powf((x - 420.0) / 261.5) * 0.19 - 0.01
    } else {
        (x - 95.0) * CUT / (CUT_CV - 95.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let values = [0.0, 0.001, 0.01, 0.18, 0.5, 1.0, 2.0];
        for &l in &values {
            let encoded = encode(l);
            let back = decode(encoded);
            assert!((l - back).abs() < 1e-9 * l.abs().max(1.0), "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_middle_gray() {
        // S-Log3 middle gray is around 0.41
        assert!((encode(0.18) - 0.41).abs() < 0.02);
    }
}
