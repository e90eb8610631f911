use super::*;

fn apply_u8(m: &ColorMatrix, px: [u8; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    color_matrix_rgba8_premul(&px, &mut out, m);
    out
}

#[test]
fn zero_amounts_are_identity() {
    assert!(ColorMatrix::grayscale(0.0).is_identity());
    assert!(ColorMatrix::sepia(0.0).is_identity());
    assert!(ColorMatrix::saturate(1.0).is_identity());
    assert!(ColorMatrix::hue_rotate(0.0).is_identity());
    assert!(ColorMatrix::contrast(1.0).is_identity());
    assert!(ColorMatrix::brightness(1.0).is_identity());
}

#[test]
fn grayscale_equalizes_channels() {
    let out = apply_u8(&ColorMatrix::grayscale(1.0), [255, 0, 0, 255]);
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
    assert_eq!(out[0], 54);
    assert_eq!(out[3], 255);
}

#[test]
fn contrast_keeps_mid_gray_and_spreads_others() {
    let m = ColorMatrix::contrast(1.8);
    let mid = m.apply_straight([0.5, 0.5, 0.5, 1.0]);
    assert!((mid[0] - 0.5).abs() < 1e-6);

    let dark = m.apply_straight([0.25, 0.25, 0.25, 1.0]);
    assert!((dark[0] - 0.05).abs() < 1e-5);
}

#[test]
fn brightness_scales_and_clamps() {
    let out = apply_u8(&ColorMatrix::brightness(1.1), [100, 250, 0, 255]);
    assert_eq!(out, [110, 255, 0, 255]);
}

#[test]
fn composition_matches_sequential_application() {
    let a = ColorMatrix::sepia(0.7);
    let b = ColorMatrix::saturate(1.5);
    let px = [0.2, 0.4, 0.3, 1.0];

    let sequential = b.apply_straight(a.apply_straight(px));
    let folded = a.then(&b).apply_straight(px);
    for c in 0..4 {
        assert!((sequential[c] - folded[c]).abs() < 1e-5);
    }
}

#[test]
fn transparent_pixels_stay_transparent() {
    let out = apply_u8(&ColorMatrix::contrast(1.5), [0, 0, 0, 0]);
    assert_eq!(out, [0, 0, 0, 0]);
}

#[test]
fn unit_range_check() {
    assert!(ColorMatrix::IDENTITY.maps_unit_range());
    assert!(ColorMatrix::grayscale(1.0).maps_unit_range());
    assert!(ColorMatrix::grayscale(0.4).maps_unit_range());
    assert!(!ColorMatrix::sepia(0.7).maps_unit_range());
    assert!(!ColorMatrix::saturate(1.5).maps_unit_range());
    assert!(!ColorMatrix::contrast(1.8).maps_unit_range());
    assert!(!ColorMatrix::brightness(1.1).maps_unit_range());
    assert!(ColorMatrix::contrast(0.5).maps_unit_range());
}
