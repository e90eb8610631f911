use super::*;

#[test]
fn fit_within_keeps_aspect_and_never_upscales() {
    let d = Dimensions::new(400, 200);
    assert_eq!(d.fit_within(100), Dimensions::new(100, 50));
    assert_eq!(d.fit_within(1000), d);

    let tall = Dimensions::new(3, 900);
    assert_eq!(tall.fit_within(90), Dimensions::new(1, 90));
}

#[test]
fn raster_new_rejects_length_mismatch() {
    assert!(RasterRgba8::new(2, 2, vec![0; 16]).is_ok());
    assert!(RasterRgba8::new(2, 2, vec![0; 15]).is_err());
}

#[test]
fn raster_pixel_reads_row_major() {
    let mut r = RasterRgba8::solid(3, 2, [0, 0, 0, 255]).unwrap();
    let i = (3 + 2) * 4; // y = 1, x = 2
    r.data[i..i + 4].copy_from_slice(&[9, 8, 7, 6]);
    assert_eq!(r.pixel(2, 1), Some([9, 8, 7, 6]));
    assert_eq!(r.pixel(3, 0), None);
}

#[test]
fn inconsistent_raster_is_detected() {
    let mut r = RasterRgba8::solid(2, 2, [1, 2, 3, 4]).unwrap();
    assert!(r.is_consistent());
    r.data.pop();
    assert!(!r.is_consistent());
}
