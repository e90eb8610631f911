use rayon::prelude::*;

use crate::{
    foundation::{
        core::{Dimensions, RasterRgba8},
        error::{FilterBoothError, FilterBoothResult},
    },
    presets::FilterPreset,
    render::{pipeline::render_filtered, surface::MAX_SURFACE_EDGE},
};

/// Edge length of the placeholder graphic.
pub const PLACEHOLDER_SIZE: u32 = 96;

const SHEET_BACKGROUND: [u8; 4] = [18, 20, 28, 255];
const SHEET_HIGHLIGHT: [u8; 4] = [255, 196, 0, 255];
const SHEET_PADDING: u32 = 8;
const HIGHLIGHT_WIDTH: u32 = 3;

/// The full-size view of the loaded image under the selected preset.
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    /// Preset the frame was rendered with.
    pub preset: &'static FilterPreset,
    /// CSS `filter` value of `preset`.
    pub css_filter: String,
    /// Rendered pixels, straight alpha.
    pub raster: RasterRgba8,
    /// `true` when the image could not be displayed and [`placeholder`] was substituted.
    pub is_placeholder: bool,
}

/// One gallery thumbnail.
#[derive(Clone, Debug)]
pub struct GalleryTile {
    /// Preset this tile previews.
    pub preset: &'static FilterPreset,
    /// CSS `filter` value of `preset`.
    pub css_filter: String,
    /// `true` for the tile of the selected preset.
    pub selected: bool,
    /// Thumbnail pixels, straight alpha.
    pub raster: RasterRgba8,
    /// `true` when the placeholder graphic stands in for the image.
    pub is_placeholder: bool,
}

/// Check that `raster` can be handed to the display layer.
pub fn check_displayable(raster: &RasterRgba8, max_display_pixels: u64) -> FilterBoothResult<()> {
    let dims = raster.dimensions();
    if dims.is_empty() {
        return Err(FilterBoothError::render("raster is empty"));
    }
    if !raster.is_consistent() {
        return Err(FilterBoothError::render(format!(
            "raster byte length {} does not match {dims}",
            raster.data.len()
        )));
    }
    if dims.width > MAX_SURFACE_EDGE || dims.height > MAX_SURFACE_EDGE {
        return Err(FilterBoothError::render(format!(
            "raster {dims} exceeds the {MAX_SURFACE_EDGE}px surface edge"
        )));
    }
    if dims.pixel_count() > max_display_pixels {
        return Err(FilterBoothError::render(format!(
            "raster {dims} exceeds {max_display_pixels} displayable pixels"
        )));
    }
    Ok(())
}

/// Render the full-size preview of `source` under `preset`.
pub fn render_preview(
    source: &RasterRgba8,
    preset: &'static FilterPreset,
    max_display_pixels: u64,
) -> FilterBoothResult<RasterRgba8> {
    check_displayable(source, max_display_pixels)?;
    render_filtered(source, &preset.pipeline())
}

/// Aspect-preserving downscale so the longest edge is at most `max_edge`.
///
/// Images already inside the bound are copied unchanged.
pub fn thumbnail(source: &RasterRgba8, max_edge: u32) -> FilterBoothResult<RasterRgba8> {
    let dims = source.dimensions();
    let fit = dims.fit_within(max_edge);
    if fit == dims {
        return Ok(source.clone());
    }
    let view = image::ImageBuffer::<image::Rgba<u8>, &[u8]>::from_raw(
        dims.width,
        dims.height,
        source.data.as_slice(),
    )
    .ok_or_else(|| FilterBoothError::render("raster byte length does not match its size"))?;
    let small = image::imageops::thumbnail(&view, fit.width, fit.height);
    Ok(RasterRgba8::from_rgba_image(small))
}

/// Render one thumbnail per preset, in preset order, marking the tile for `selected`.
///
/// The source is downscaled once; the tiles then render in parallel.
pub fn render_gallery(
    source: &RasterRgba8,
    selected: &'static FilterPreset,
    thumbnail_size: u32,
    max_display_pixels: u64,
) -> FilterBoothResult<Vec<GalleryTile>> {
    check_displayable(source, max_display_pixels)?;
    let thumb = thumbnail(source, thumbnail_size)?;

    FilterPreset::all()
        .par_iter()
        .map(|preset| -> FilterBoothResult<GalleryTile> {
            Ok(GalleryTile {
                preset,
                css_filter: preset.css_filter(),
                selected: *preset == *selected,
                raster: render_filtered(&thumb, &preset.pipeline())?,
                is_placeholder: false,
            })
        })
        .collect()
}

/// Gallery shown when the loaded image cannot be displayed: every tile is the placeholder.
pub fn placeholder_gallery(selected: &'static FilterPreset) -> Vec<GalleryTile> {
    let graphic = placeholder();
    FilterPreset::all()
        .iter()
        .map(|preset| GalleryTile {
            preset,
            css_filter: preset.css_filter(),
            selected: *preset == *selected,
            raster: graphic.clone(),
            is_placeholder: true,
        })
        .collect()
}

/// The fixed graphic substituted for an image that cannot be displayed.
pub fn placeholder() -> RasterRgba8 {
    const LIGHT: [u8; 4] = [230, 230, 230, 255];
    const DARK: [u8; 4] = [200, 200, 200, 255];
    const MARK: [u8; 4] = [150, 150, 150, 255];
    const CELL: u32 = 12;

    let n = PLACEHOLDER_SIZE;
    let mut data = Vec::with_capacity((n * n * 4) as usize);
    for y in 0..n {
        for x in 0..n {
            let on_cross = x.abs_diff(y) <= 1 || (x + y).abs_diff(n - 1) <= 1;
            let px = if on_cross {
                MARK
            } else if ((x / CELL) + (y / CELL)) % 2 == 0 {
                LIGHT
            } else {
                DARK
            };
            data.extend_from_slice(&px);
        }
    }
    RasterRgba8 {
        width: n,
        height: n,
        data,
    }
}

/// Lay gallery tiles out as a single raster: a `columns`-wide grid with the selected tile framed.
pub fn contact_sheet(tiles: &[GalleryTile], columns: u32) -> FilterBoothResult<RasterRgba8> {
    if tiles.is_empty() {
        return Err(FilterBoothError::validation("contact sheet needs at least one tile"));
    }
    if columns == 0 {
        return Err(FilterBoothError::validation("contact sheet needs at least one column"));
    }

    let edge = tiles
        .iter()
        .map(|t| t.raster.width.max(t.raster.height))
        .max()
        .unwrap_or(1);
    let cell = edge + 2 * SHEET_PADDING;
    let count = u32::try_from(tiles.len())
        .map_err(|_| FilterBoothError::validation("too many gallery tiles"))?;
    let cols = columns.min(count);
    let rows = count.div_ceil(cols);
    let size = Dimensions::new(cols * cell, rows * cell);

    let mut sheet =
        image::RgbaImage::from_pixel(size.width, size.height, image::Rgba(SHEET_BACKGROUND));
    for (i, tile) in (0u32..).zip(tiles) {
        let x0 = (i % cols) * cell + (cell - tile.raster.width) / 2;
        let y0 = (i / cols) * cell + (cell - tile.raster.height) / 2;
        if tile.selected {
            frame(
                &mut sheet,
                x0.saturating_sub(HIGHLIGHT_WIDTH + 1),
                y0.saturating_sub(HIGHLIGHT_WIDTH + 1),
                tile.raster.width + 2 * (HIGHLIGHT_WIDTH + 1),
                tile.raster.height + 2 * (HIGHLIGHT_WIDTH + 1),
            );
        }
        let img = tile.raster.clone().into_rgba_image()?;
        image::imageops::overlay(&mut sheet, &img, i64::from(x0), i64::from(y0));
    }
    Ok(RasterRgba8::from_rgba_image(sheet))
}

fn frame(sheet: &mut image::RgbaImage, x: u32, y: u32, w: u32, h: u32) {
    let t = HIGHLIGHT_WIDTH;
    fill_rect(sheet, x, y, w, t);
    fill_rect(sheet, x, (y + h).saturating_sub(t), w, t);
    fill_rect(sheet, x, y, t, h);
    fill_rect(sheet, (x + w).saturating_sub(t), y, t, h);
}

fn fill_rect(sheet: &mut image::RgbaImage, x: u32, y: u32, w: u32, h: u32) {
    let x1 = (x + w).min(sheet.width());
    let y1 = (y + h).min(sheet.height());
    for yy in y..y1 {
        for xx in x..x1 {
            sheet.put_pixel(xx, yy, image::Rgba(SHEET_HIGHLIGHT));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
