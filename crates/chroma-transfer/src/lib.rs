//! # chroma-transfer
//!
//! Encode/decode transfer function pairs for RGB colourspaces.
//!
//! Every module exposes a pure scalar pair that are mutual inverses over
//! [0, 1] (camera logs extend above 1 for scene-referred input):
//!
//! - `encode`-direction: linear light to encoded values (OETF-style)
//! - `decode`-direction: encoded values back to linear light (EOTF-style)
//!
//! # Supported Curves
//!
//! | Module | Curve | Used by |
//! |--------|-------|---------|
//! | [`srgb`] | IEC 61966-2-1 piecewise | sRGB, Display P3 |
//! | [`gamma`] | pure power law | Adobe RGB, Best RGB, DCI-P3, ... |
//! | [`rec709`] | BT.709 OETF | Rec.709 |
//! | [`rec2020`] | BT.2020 OETF (precise constants) | Rec.2020 |
//! | [`acescc`] | pure log2 | ACEScc |
//! | [`acescct`] | log2 with toe | ACEScct |
//! | [`logc`] | ARRI LogC3 (EI 800) | ALEXA Wide Gamut |
//! | [`s_log3`] | Sony S-Log3 | S-Gamut3 |
//! | [`v_log`] | Panasonic V-Log | V-Gamut |
//! | [`romm`] | gamma 1.8 with linear segment | ProPhoto RGB |
//! | [`lstar`] | CIE L* lightness | ECI RGB v2 |
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let encoded = srgb::oetf(0.18);
//! let linear = srgb::eotf(encoded);
//! assert!((linear - 0.18).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `chroma-spaces` - dataset modules pick their encode/decode pair here

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod acescc;
pub mod acescct;
pub mod gamma;
pub mod logc;
pub mod lstar;
pub mod rec2020;
pub mod rec709;
pub mod romm;
pub mod s_log3;
pub mod srgb;
pub mod v_log;

// Re-export common functions
pub use gamma::{ADOBE_GAMMA, gamma_eotf, gamma_oetf};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
