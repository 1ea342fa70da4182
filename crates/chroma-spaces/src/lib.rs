//! # chroma-spaces
//!
//! RGB colourspace descriptors, datasets, and the name registry.
//!
//! This crate ties the workspace together:
//!
//! - [`RgbColourspace`] - immutable descriptor bundling name, primaries,
//!   whitepoint, derived forward/inverse matrices, and the encode/decode
//!   transfer pair
//! - [`Registry`], [`registry()`] - case-insensitive, alias-aware lookup of
//!   shared descriptors
//! - [`dataset`] - per-colourspace declarations (ACES, sRGB, Rec. 2020,
//!   ProPhoto RGB, camera-native gamuts, ...)
//! - [`convert`] helpers - RGB to RGB conversion through XYZ with optional
//!   chromatic adaptation
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_math::Vec3;
//! use chroma_spaces::registry;
//!
//! // Lookups are case-insensitive, and aliases resolve to the same
//! // shared descriptor.
//! let srgb = registry().lookup("SRGB").unwrap();
//! let aces = registry().lookup("aces").unwrap();
//!
//! // Descriptors expose the four conversion operations.
//! let xyz = srgb.to_xyz(Vec3::new(0.5, 0.5, 0.5));
//! let rgb = aces.from_xyz(xyz);
//! let encoded = srgb.encode(rgb);
//! ```
//!
//! # Architecture
//!
//! ```text
//!                  chroma-spaces
//!                       |
//!     +-----------------+----------------+
//!     |                 |                |
//! chroma-transfer  chroma-primaries  (datasets)
//!     |                 |
//!     +--------+--------+
//!              |
//!          chroma-math
//!              |
//!          chroma-core
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-core`] - chromaticities, illuminants, errors
//! - [`chroma-math`] - Vec3/Mat3, chromatic adaptation
//! - [`chroma-transfer`] - encode/decode pairs
//! - [`chroma-primaries`] - normalised primary matrix derivation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colourspace;
mod convert;
mod registry;
pub mod dataset;

pub use colourspace::{RgbColourspace, TransferFn, linear, transfer};
pub use convert::{convert, convert_linear, rgb_to_rgb_matrix};
pub use registry::{Registry, registry};

// Re-export sub-crates for convenience
pub use chroma_math as math;
pub use chroma_primaries as primaries;
pub use chroma_transfer as curves;

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::colourspace::{RgbColourspace, TransferFn, linear, transfer};
    pub use crate::convert::{convert, convert_linear, rgb_to_rgb_matrix};
    pub use crate::registry::{Registry, registry};

    pub use chroma_core::{Chromaticity, Error, Observer, Result, whitepoint};
    pub use chroma_math::{BRADFORD, CAT02, Mat3, VON_KRIES, Vec3};
    pub use chroma_primaries::{Primaries, normalised_primary_matrix};
}
