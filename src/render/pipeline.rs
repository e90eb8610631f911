use crate::{
    effects::chain::FxPipeline,
    foundation::{
        core::{Dimensions, RasterRgba8},
        error::FilterBoothResult,
    },
    render::surface::{Surface, check_surface_size, encode_png_rgba8},
};

/// Render `src` through `fx` into a fresh straight-alpha buffer. `src` is never modified.
///
/// An identity pipeline returns an exact copy without touching a surface.
pub fn render_filtered(src: &RasterRgba8, fx: &FxPipeline) -> FilterBoothResult<RasterRgba8> {
    if fx.is_identity() {
        return Ok(src.clone());
    }
    let mut surface = Surface::new(src.dimensions())?;
    surface.draw_image(src, fx)?;
    Ok(surface.to_raster())
}

/// Draw `src` once through `fx` onto an off-screen surface and encode the result as PNG.
///
/// An identity pipeline encodes the straight-alpha source directly, so translucent and fully
/// transparent pixels keep their exact color.
pub fn bake_png(src: &RasterRgba8, fx: &FxPipeline) -> FilterBoothResult<(Vec<u8>, Dimensions)> {
    if fx.is_identity() {
        check_surface_size(src.dimensions())?;
        return Ok((encode_png_rgba8(src)?, src.dimensions()));
    }
    let mut surface = Surface::new(src.dimensions())?;
    surface.draw_image(src, fx)?;
    let png = surface.encode_png()?;
    let dims = surface.dimensions();
    drop(surface);
    Ok((png, dims))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
