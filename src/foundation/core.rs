use crate::foundation::error::{FilterBoothError, FilterBoothResult};

/// Pixel dimensions of an image or surface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create a dimensions value.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Return `true` when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte length of a tightly packed RGBA8 buffer with these dimensions.
    pub fn rgba8_len(self) -> FilterBoothResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| FilterBoothError::validation("rgba8 buffer size overflow"))
    }

    /// Scale down (never up) so the longest edge is at most `max_edge`, keeping aspect ratio.
    ///
    /// Each side is at least 1 pixel.
    pub fn fit_within(self, max_edge: u32) -> Self {
        let longest = self.width.max(self.height);
        if longest <= max_edge || longest == 0 {
            return self;
        }
        let scale = f64::from(max_edge) / f64::from(longest);
        let w = (f64::from(self.width) * scale).round().max(1.0) as u32;
        let h = (f64::from(self.height) * scale).round().max(1.0) as u32;
        Self {
            width: w.min(max_edge),
            height: h.min(max_edge),
        }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A straight-alpha RGBA8 raster, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterRgba8 {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// RGBA8 bytes (not premultiplied).
    pub data: Vec<u8>,
}

impl RasterRgba8 {
    /// Wrap an existing buffer, checking that its length matches `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> FilterBoothResult<Self> {
        let expected = Dimensions::new(width, height).rgba8_len()?;
        if data.len() != expected {
            return Err(FilterBoothError::validation(format!(
                "raster {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A raster filled with one straight RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> FilterBoothResult<Self> {
        let n = Dimensions::new(width, height).rgba8_len()? / 4;
        Self::new(width, height, rgba.repeat(n))
    }

    /// Pixel dimensions.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Return `true` when the byte length agrees with the dimensions.
    pub fn is_consistent(&self) -> bool {
        self.dimensions()
            .rgba8_len()
            .is_ok_and(|n| n == self.data.len())
    }

    /// Read one pixel. Out-of-range coordinates return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert into an `image` buffer.
    pub fn into_rgba_image(self) -> FilterBoothResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| FilterBoothError::validation("raster byte length mismatch"))
    }

    /// Take ownership of an `image` buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
