//! # chroma-math
//!
//! Math utilities for colourimetric computation.
//!
//! This crate provides the double-precision primitives every derived matrix
//! in the workspace is built from:
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transformations
//! - [`Vec3`] - triplets for RGB and XYZ values
//! - Chromatic adaptation transforms (Bradford, CAT02, Von Kries)
//!
//! # Design
//!
//! Matrix storage is **row-major** with **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything is `f64`: reference matrices are pinned to six significant
//! digits in tests, which single precision does not reliably reach.
//! [`glam`] interop (`DMat3`/`DVec3`) is provided for callers already
//! working in glam types.
//!
//! # Dependencies
//!
//! - [`glam`] - interop with DMat3/DVec3
//! - [`chroma-core`] - core types
//!
//! # Used By
//!
//! - `chroma-primaries` - normalised primary matrix derivation
//! - `chroma-spaces` - descriptor transforms, RGB to RGB conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
