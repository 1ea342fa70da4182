//! RGB to RGB conversion through XYZ.
//!
//! Conversion between any two registered colourspaces composes their
//! descriptor matrices through XYZ as the interchange space:
//!
//! ```text
//! rgb_dst = from_xyz_dst * (adapt?) * to_xyz_src * rgb_src
//! ```
//!
//! When source and destination whitepoints differ, a chromatic adaptation
//! transform can be inserted in the XYZ leg; without one the conversion is
//! a plain re-projection and whites will shift.
//!
//! # Example
//!
//! ```rust
//! use chroma_math::{BRADFORD, Vec3};
//! use chroma_spaces::{convert_linear, registry};
//!
//! let srgb = registry().lookup("sRGB").unwrap();
//! let aces = registry().lookup("aces").unwrap();
//!
//! let rgb = Vec3::new(0.5, 0.25, 0.125);
//! let converted = convert_linear(rgb, &srgb, &aces, Some(BRADFORD));
//! ```

use chroma_math::{Mat3, Vec3, adaptation_matrix};

use crate::colourspace::RgbColourspace;

/// Computes the matrix converting linear RGB in `src` to linear RGB in
/// `dst`, going through XYZ.
///
/// `cat` selects the chromatic adaptation transform applied between the
/// two whitepoints (e.g. [`chroma_math::BRADFORD`]); pass `None` to skip
/// adaptation. When the whitepoints already coincide the adaptation step
/// is the identity and is elided.
pub fn rgb_to_rgb_matrix(src: &RgbColourspace, dst: &RgbColourspace, cat: Option<Mat3>) -> Mat3 {
    let src_to_xyz = *src.to_xyz_matrix();
    let xyz_to_dst = *dst.from_xyz_matrix();

    match cat {
        Some(method) if src.whitepoint() != dst.whitepoint() => {
            let adapt = adaptation_matrix(method, src.white_xyz(), dst.white_xyz());
            xyz_to_dst * adapt * src_to_xyz
        }
        _ => xyz_to_dst * src_to_xyz,
    }
}

/// Converts a linear RGB triplet from `src` to `dst`.
#[inline]
pub fn convert_linear(
    rgb_linear: Vec3,
    src: &RgbColourspace,
    dst: &RgbColourspace,
    cat: Option<Mat3>,
) -> Vec3 {
    rgb_to_rgb_matrix(src, dst, cat) * rgb_linear
}

/// Converts an encoded RGB triplet from `src` to `dst`.
///
/// Decodes on entry with the source transfer pair, converts linearly, and
/// encodes on exit with the destination pair.
pub fn convert(
    rgb_encoded: Vec3,
    src: &RgbColourspace,
    dst: &RgbColourspace,
    cat: Option<Mat3>,
) -> Vec3 {
    let linear = src.decode(rgb_encoded);
    let converted = convert_linear(linear, src, dst, cat);
    dst.encode(converted)
}
