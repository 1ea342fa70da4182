//! Per-colourspace dataset declarations.
//!
//! Each module declares one colourspace family the same way: primaries
//! constants, a whitepoint picked from the illuminant table, an
//! encode/decode pair from `chroma-transfer`, and a lazily built shared
//! descriptor. Variants are data, not types - every module goes through
//! the same [`RgbColourspace::new`](crate::RgbColourspace::new) derivation.
//!
//! [`all()`] enumerates every descriptor for registry construction.

pub mod aces;
pub mod adobe_rgb_1998;
pub mod adobe_wide_gamut_rgb;
pub mod alexa_wide_gamut;
pub mod apple_rgb;
pub mod best_rgb;
pub mod beta_rgb;
pub mod cie_rgb;
pub mod color_match_rgb;
pub mod dci_p3;
pub mod display_p3;
pub mod don_rgb_4;
pub mod eci_rgb_v2;
pub mod ekta_space_ps5;
pub mod ntsc_rgb;
pub mod pal_secam_rgb;
pub mod rec_2020;
pub mod rec_709;
pub mod romm_rgb;
pub mod russell_rgb;
pub mod s_gamut3;
pub mod smpte_c_rgb;
pub mod srgb;
pub mod v_gamut;

use std::sync::Arc;

use crate::colourspace::RgbColourspace;

/// Every dataset colourspace, in registration order.
///
/// Canonical entries only; aliases are added by the default registry on
/// top of these.
pub fn all() -> Vec<Arc<RgbColourspace>> {
    vec![
        aces::ACES_2065_1.clone(),
        aces::ACES_CC.clone(),
        aces::ACES_CCT.clone(),
        aces::ACES_CG.clone(),
        adobe_rgb_1998::ADOBE_RGB_1998.clone(),
        adobe_wide_gamut_rgb::ADOBE_WIDE_GAMUT_RGB.clone(),
        alexa_wide_gamut::ALEXA_WIDE_GAMUT.clone(),
        apple_rgb::APPLE_RGB.clone(),
        best_rgb::BEST_RGB.clone(),
        beta_rgb::BETA_RGB.clone(),
        cie_rgb::CIE_RGB.clone(),
        color_match_rgb::COLOR_MATCH_RGB.clone(),
        dci_p3::DCI_P3.clone(),
        dci_p3::DCI_P3_P.clone(),
        display_p3::DISPLAY_P3.clone(),
        don_rgb_4::DON_RGB_4.clone(),
        eci_rgb_v2::ECI_RGB_V2.clone(),
        ekta_space_ps5::EKTA_SPACE_PS_5.clone(),
        ntsc_rgb::NTSC_RGB.clone(),
        pal_secam_rgb::PAL_SECAM_RGB.clone(),
        rec_709::REC_709.clone(),
        rec_2020::REC_2020.clone(),
        romm_rgb::PROPHOTO_RGB.clone(),
        russell_rgb::RUSSELL_RGB.clone(),
        s_gamut3::S_GAMUT3.clone(),
        smpte_c_rgb::SMPTE_C_RGB.clone(),
        srgb::SRGB.clone(),
        v_gamut::V_GAMUT.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_names_distinct_after_case_folding() {
        let spaces = all();
        let folded: HashSet<String> =
            spaces.iter().map(|cs| cs.name().to_lowercase()).collect();
        assert_eq!(folded.len(), spaces.len());
    }

    #[test]
    fn test_all_count() {
        assert_eq!(all().len(), 28);
    }
}
