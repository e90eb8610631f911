use std::io::Cursor;

use crate::{
    effects::{
        blur::blur_rgba8_premul,
        chain::{FxPipeline, PassFx},
        matrix::color_matrix_rgba8_premul,
    },
    foundation::{
        core::{Dimensions, RasterRgba8},
        error::{FilterBoothError, FilterBoothResult},
    },
};

/// Largest surface edge, in pixels.
pub const MAX_SURFACE_EDGE: u32 = u16::MAX as u32;

/// An off-screen premultiplied RGBA8 raster surface.
///
/// Images are drawn 1:1 with an [`FxPipeline`] applied at draw time; the surface then holds a
/// permanently filtered copy that can be read back or encoded. Dropping the surface releases it.
pub struct Surface {
    pixmap: vello_cpu::Pixmap,
    dims: Dimensions,
    scratch: Vec<u8>,
}

impl Surface {
    /// Allocate a transparent surface.
    pub fn new(dims: Dimensions) -> FilterBoothResult<Self> {
        let (w, h) = check_surface_size(dims)?;
        Ok(Self {
            pixmap: vello_cpu::Pixmap::new(w, h),
            dims,
            scratch: Vec::new(),
        })
    }

    /// Surface size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Draw `src` once at its natural size, running `fx` as part of the draw.
    pub fn draw_image(&mut self, src: &RasterRgba8, fx: &FxPipeline) -> FilterBoothResult<()> {
        if src.dimensions() != self.dims {
            return Err(FilterBoothError::render(format!(
                "image {} does not match surface {}",
                src.dimensions(),
                self.dims
            )));
        }
        let dst = self.pixmap.data_as_u8_slice_mut();
        if dst.len() != src.data.len() {
            return Err(FilterBoothError::render("image byte length mismatch"));
        }
        dst.copy_from_slice(&src.data);
        premultiply_rgba8_in_place(dst);

        for pass in &fx.passes {
            self.exec_pass(pass)?;
        }
        Ok(())
    }

    fn exec_pass(&mut self, pass: &PassFx) -> FilterBoothResult<()> {
        match pass {
            PassFx::ColorMatrix(m) => {
                self.scratch.clear();
                self.scratch
                    .extend_from_slice(self.pixmap.data_as_u8_slice());
                color_matrix_rgba8_premul(&self.scratch, self.pixmap.data_as_u8_slice_mut(), m);
            }
            PassFx::Blur { radius_px, sigma } => {
                let out = blur_rgba8_premul(
                    self.pixmap.data_as_u8_slice(),
                    self.dims.width,
                    self.dims.height,
                    *radius_px,
                    *sigma,
                )?;
                self.pixmap.data_as_u8_slice_mut().copy_from_slice(&out);
            }
        }
        Ok(())
    }

    /// Read the surface back as straight-alpha RGBA8.
    pub fn to_raster(&self) -> RasterRgba8 {
        let mut data = self.pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        RasterRgba8 {
            width: self.dims.width,
            height: self.dims.height,
            data,
        }
    }

    /// Encode the surface contents as a PNG byte stream.
    pub fn encode_png(&self) -> FilterBoothResult<Vec<u8>> {
        encode_png_rgba8(&self.to_raster())
    }
}

/// Check that `dims` fits a surface, returning the pixmap edge lengths.
pub fn check_surface_size(dims: Dimensions) -> FilterBoothResult<(u16, u16)> {
    if dims.is_empty() {
        return Err(FilterBoothError::render("surface must be at least 1x1"));
    }
    let w: u16 = dims.width.try_into().map_err(|_| {
        FilterBoothError::render(format!(
            "surface width {} exceeds {MAX_SURFACE_EDGE}",
            dims.width
        ))
    })?;
    let h: u16 = dims.height.try_into().map_err(|_| {
        FilterBoothError::render(format!(
            "surface height {} exceeds {MAX_SURFACE_EDGE}",
            dims.height
        ))
    })?;
    Ok((w, h))
}

/// Encode a straight-alpha raster as PNG without touching a surface.
pub fn encode_png_rgba8(raster: &RasterRgba8) -> FilterBoothResult<Vec<u8>> {
    let img = raster.clone().into_rgba_image()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| FilterBoothError::encode(format!("png: {e}")))?;
    Ok(buf)
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface").field("dims", &self.dims).finish()
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
