use super::*;
use crate::effects::{chain::compile_effects, op::EffectOp};

fn gradient(w: u32, h: u32) -> RasterRgba8 {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 40) as u8, (y * 60) as u8, 90, 255]);
        }
    }
    RasterRgba8::new(w, h, data).unwrap()
}

#[test]
fn identity_draw_of_opaque_image_is_lossless() {
    let src = gradient(5, 4);
    let mut surface = Surface::new(src.dimensions()).unwrap();
    surface.draw_image(&src, &FxPipeline::default()).unwrap();
    assert_eq!(surface.to_raster(), src);
}

#[test]
fn grayscale_draw_equalizes_channels() {
    let src = gradient(4, 3);
    let mut surface = Surface::new(src.dimensions()).unwrap();
    let fx = compile_effects(&[EffectOp::Grayscale { amount: 1.0 }]);
    surface.draw_image(&src, &fx).unwrap();
    for px in surface.to_raster().data.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn draw_rejects_size_mismatch() {
    let src = gradient(4, 3);
    let mut surface = Surface::new(Dimensions::new(3, 4)).unwrap();
    assert!(surface.draw_image(&src, &FxPipeline::default()).is_err());
}

#[test]
fn surface_limits_are_enforced() {
    assert!(Surface::new(Dimensions::new(0, 10)).is_err());
    assert!(Surface::new(Dimensions::new(MAX_SURFACE_EDGE + 1, 1)).is_err());
}

#[test]
fn encoded_png_decodes_to_surface_pixels() {
    let src = gradient(6, 2);
    let mut surface = Surface::new(src.dimensions()).unwrap();
    let fx = compile_effects(&[EffectOp::Sepia { amount: 1.0 }]);
    surface.draw_image(&src, &fx).unwrap();

    let png = surface.encode_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (6, 2));
    assert_eq!(decoded.into_raw(), surface.to_raster().data);
}

#[test]
fn premultiply_round_trip_is_exact_for_opaque_and_transparent() {
    let mut px = vec![12u8, 34, 56, 255, 99, 99, 99, 0];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![12, 34, 56, 255, 0, 0, 0, 0]);
}
