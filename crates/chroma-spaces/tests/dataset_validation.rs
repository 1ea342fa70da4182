//! Dataset-wide validation of derived matrices and transfer pairs.
//!
//! Sweeps every registered colourspace and checks the invariants the
//! descriptors promise:
//!
//! - equal-energy RGB white maps to the whitepoint XYZ (Y = 1)
//! - forward and inverse matrices compose to identity
//! - decode inverts encode over [0, 1]
//! - lookups are case-insensitive and aliases share descriptors
//!
//! Golden matrices come from the published standards:
//!
//! - IEC 61966-2-1 (sRGB)
//! - SMPTE ST 2065-1 (ACES2065-1)

use std::sync::Arc;

use chroma_math::Vec3;
use chroma_primaries::xy_to_xyz;
use chroma_spaces::registry;

/// Published sRGB to XYZ (D65) matrix.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Published ACES2065-1 (AP0) to XYZ matrix.
const ACES_AP0_TO_XYZ: [[f64; 3]; 3] = [
    [0.9525523959, 0.0000000000, 0.0000936786],
    [0.3439664498, 0.7281660966, -0.0721325464],
    [0.0000000000, 0.0000000000, 1.0088251844],
];

#[test]
fn white_maps_to_whitepoint_everywhere() {
    for name in registry().names() {
        let cs = registry().lookup(name).unwrap();
        let white = cs.to_xyz(Vec3::ONE);
        let expected = xy_to_xyz(cs.whitepoint()).unwrap();

        for (got, want) in [
            (white.x, expected.x),
            (white.y, expected.y),
            (white.z, expected.z),
        ] {
            let tol = want.abs().max(1.0) * 1e-6;
            assert!(
                (got - want).abs() < tol,
                "{}: white {:?} != whitepoint XYZ {:?}",
                name,
                white,
                expected
            );
        }
    }
}

#[test]
fn matrices_roundtrip_everywhere() {
    // from_XYZ(to_XYZ(rgb)) == rgb on a grid of in-gamut samples
    let samples = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.18, 0.18, 0.18),
        Vec3::new(0.9, 0.1, 0.4),
        Vec3::new(0.25, 0.5, 0.75),
        Vec3::new(0.01, 0.99, 0.37),
    ];

    for name in registry().names() {
        let cs = registry().lookup(name).unwrap();
        for rgb in samples {
            let back = cs.from_xyz(cs.to_xyz(rgb));
            assert!(
                (rgb.x - back.x).abs() < 1e-9
                    && (rgb.y - back.y).abs() < 1e-9
                    && (rgb.z - back.z).abs() < 1e-9,
                "{}: {:?} -> {:?}",
                name,
                rgb,
                back
            );
        }
    }
}

#[test]
fn transfer_pairs_roundtrip_everywhere() {
    // Camera-log seams sit a touch off their published constants, so the
    // sweep tolerance is looser than the per-curve unit tests.
    for name in registry().names() {
        let cs = registry().lookup(name).unwrap();
        cs.validate_transfer_pair(256, 1e-5)
            .unwrap_or_else(|e| panic!("{}: {}", name, e));
    }
}

#[test]
fn lookups_are_case_insensitive() {
    for name in registry().names() {
        let canonical = registry().lookup(name).unwrap();
        let upper = registry().lookup(&name.to_uppercase()).unwrap();
        let lower = registry().lookup(&name.to_lowercase()).unwrap();
        assert!(Arc::ptr_eq(&canonical, &upper), "{}", name);
        assert!(Arc::ptr_eq(&canonical, &lower), "{}", name);
    }
}

#[test]
fn aliases_share_descriptors() {
    for (alias, canonical) in [
        ("aces", "ACES2065-1"),
        ("adobe1998", "Adobe RGB (1998)"),
        ("prophoto", "ProPhoto RGB"),
    ] {
        let a = registry().lookup(alias).unwrap();
        let c = registry().lookup(canonical).unwrap();
        assert!(Arc::ptr_eq(&a, &c), "{} -> {}", alias, canonical);
    }
}

#[test]
fn srgb_matches_published_matrix() {
    let srgb = registry().lookup("sRGB").unwrap();
    let m = srgb.to_xyz_matrix();
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (m.m[i][j] - SRGB_TO_XYZ[i][j]).abs() < 1e-6,
                "m[{}][{}] = {}",
                i,
                j,
                m.m[i][j]
            );
        }
    }
}

#[test]
fn aces_matches_published_matrix() {
    let aces = registry().lookup("aces").unwrap();
    let m = aces.to_xyz_matrix();
    for i in 0..3 {
        for j in 0..3 {
            let expected = ACES_AP0_TO_XYZ[i][j];
            // Six significant digits against the published values
            let tol = expected.abs().max(1e-3) * 1e-6;
            assert!(
                (m.m[i][j] - expected).abs() < tol,
                "m[{}][{}] = {}, expected {}",
                i,
                j,
                m.m[i][j],
                expected
            );
        }
    }
}

#[test]
fn registry_has_every_dataset_entry() {
    let names = registry().names();
    assert_eq!(names.len(), 28);
    for expected in [
        "ACES2065-1",
        "ACEScc",
        "ACEScct",
        "ACEScg",
        "Adobe RGB (1998)",
        "ALEXA Wide Gamut",
        "DCI-P3",
        "Display P3",
        "ECI RGB v2",
        "ProPhoto RGB",
        "Rec. 709",
        "Rec. 2020",
        "S-Gamut3",
        "V-Gamut",
        "sRGB",
    ] {
        assert!(registry().contains(expected), "{} missing", expected);
    }
}
