use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::foundation::{
    core::RasterRgba8,
    error::{FilterBoothError, FilterBoothResult},
};

/// Media types accepted by the upload handler start with this prefix.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Media type used when a file's type cannot be determined.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// A user-chosen file: its name, declared media type and contents.
#[derive(Clone, Debug)]
pub struct ImageFile {
    /// File name as shown to the user.
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    /// Encoded file contents.
    pub bytes: Arc<[u8]>,
}

impl ImageFile {
    /// Wrap an in-memory file.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, declaring its media type from the extension.
    pub fn from_path(path: &Path) -> FilterBoothResult<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, media_type_for_path(path), bytes))
    }

    /// Replace the declared media type.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Return `true` when the declared media type is an image type.
    pub fn is_image(&self) -> bool {
        is_image_media_type(&self.media_type)
    }
}

/// Media type implied by a path's extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    image::ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or(UNKNOWN_MEDIA_TYPE)
}

/// Return `true` when `media_type` starts with exactly `image/`.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Decode encoded image bytes into a straight-alpha RGBA8 raster.
pub fn decode_image(bytes: &[u8]) -> FilterBoothResult<RasterRgba8> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FilterBoothError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(FilterBoothError::decode("image has no pixels"));
    }
    Ok(RasterRgba8::from_rgba_image(rgba))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
