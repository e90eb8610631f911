use super::*;
use crate::presets::PRESETS;

fn photo(w: u32, h: u32) -> RasterRgba8 {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 7) as u8, (y * 5) as u8, 128, 255]);
        }
    }
    RasterRgba8::new(w, h, data).unwrap()
}

#[test]
fn preview_matches_source_size_and_does_not_mutate_it() {
    let src = photo(40, 30);
    let before = src.clone();
    let sepia = FilterPreset::lookup("Sepia").unwrap();
    let out = render_preview(&src, sepia, u64::MAX).unwrap();
    assert_eq!(out.dimensions(), src.dimensions());
    assert_ne!(out, src);
    assert_eq!(src, before);
}

#[test]
fn displayability_checks() {
    let src = photo(10, 10);
    assert!(check_displayable(&src, 100).is_ok());
    assert!(check_displayable(&src, 99).is_err());

    let broken = RasterRgba8 {
        width: 10,
        height: 10,
        data: vec![0; 12],
    };
    assert!(check_displayable(&broken, u64::MAX).is_err());

    let wide = RasterRgba8::solid(MAX_SURFACE_EDGE + 1, 1, [0, 0, 0, 255]).unwrap();
    assert!(check_displayable(&wide, u64::MAX).is_err());
}

#[test]
fn gallery_has_one_tile_per_preset_in_order() {
    let src = photo(64, 32);
    let selected = FilterPreset::lookup("Vintage").unwrap();
    let tiles = render_gallery(&src, selected, 16, u64::MAX).unwrap();

    assert_eq!(tiles.len(), PRESETS.len());
    for (tile, preset) in tiles.iter().zip(PRESETS.iter()) {
        assert_eq!(tile.preset.name(), preset.name());
        assert_eq!(tile.raster.dimensions(), Dimensions::new(16, 8));
        assert!(!tile.is_placeholder);
    }
    let marked: Vec<_> = tiles.iter().filter(|t| t.selected).collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].preset.name(), "Vintage");
}

#[test]
fn small_sources_are_not_upscaled() {
    let src = photo(5, 3);
    assert_eq!(thumbnail(&src, 160).unwrap(), src);
}

#[test]
fn placeholder_is_fixed() {
    let a = placeholder();
    assert_eq!(a.dimensions(), Dimensions::new(PLACEHOLDER_SIZE, PLACEHOLDER_SIZE));
    assert!(a.is_consistent());
    assert_eq!(a, placeholder());
    assert_eq!(a.pixel(0, 0), Some([150, 150, 150, 255]));

    let tiles = placeholder_gallery(FilterPreset::identity());
    assert_eq!(tiles.len(), PRESETS.len());
    assert!(tiles.iter().all(|t| t.is_placeholder));
    assert!(tiles[0].selected);
}

#[test]
fn contact_sheet_frames_the_selected_tile() {
    let src = photo(20, 20);
    let selected = FilterPreset::identity();
    let tiles = render_gallery(&src, selected, 20, u64::MAX).unwrap();
    let sheet = contact_sheet(&tiles, 4).unwrap();

    // 4 columns x 2 rows of 36px cells.
    assert_eq!(sheet.dimensions(), Dimensions::new(144, 72));
    assert_eq!(sheet.pixel(0, 0), Some(SHEET_BACKGROUND));
    // First tile sits at (8, 8); its frame starts 4px outside.
    assert_eq!(sheet.pixel(4, 4), Some(SHEET_HIGHLIGHT));
    assert_eq!(sheet.pixel(8, 8), src.pixel(0, 0));
    // Second tile is not selected.
    assert_eq!(sheet.pixel(36 + 4, 4), Some(SHEET_BACKGROUND));
}

#[test]
fn contact_sheet_rejects_degenerate_layouts() {
    assert!(contact_sheet(&[], 4).is_err());
    let tiles = placeholder_gallery(FilterPreset::identity());
    assert!(contact_sheet(&tiles, 0).is_err());
}
