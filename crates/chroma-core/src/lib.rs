//! # chroma-core
//!
//! Core types for the chroma-rs colourimetric dataset workspace.
//!
//! This crate provides the foundational types shared by every other crate:
//!
//! - [`Chromaticity`] - CIE xy coordinate pair for primaries and whitepoints
//! - [`Observer`], [`whitepoint`] - standard illuminant whitepoint lookup
//! - [`Error`], [`Result`] - unified error handling
//!
//! # Crate Structure
//!
//! `chroma-core` has no internal dependencies; the rest of the workspace
//! builds on it:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-math (matrices, chromatic adaptation)
//!    +-- chroma-transfer (encode/decode curves)
//!    +-- chroma-primaries (normalised primary matrix derivation)
//!    +-- chroma-spaces (colourspace descriptors, registry, datasets)
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro error implementation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chromaticity;
pub mod error;
pub mod illuminant;

pub use chromaticity::Chromaticity;
pub use error::{Error, Result};
pub use illuminant::{Observer, whitepoint};
