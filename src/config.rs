//! Session configuration.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{FilterBoothError, FilterBoothResult};

/// Product prefix used in export file names.
pub const DEFAULT_EXPORT_PREFIX: &str = "FilterBooth";

/// Tunables for a [`crate::Session`].
///
/// Every field has a default, so a JSON file only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Fixed prefix of exported file names (`<prefix>_<Filter>_Filtered.png`).
    pub export_prefix: String,
    /// Longest edge of gallery thumbnails, in pixels.
    pub thumbnail_size: u32,
    /// Largest raster (in pixels) the display layer agrees to render.
    pub max_display_pixels: u64,
    /// Tiles per row in the gallery contact sheet.
    pub gallery_columns: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            export_prefix: DEFAULT_EXPORT_PREFIX.to_owned(),
            thumbnail_size: 160,
            max_display_pixels: 64 * 1024 * 1024,
            gallery_columns: 4,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> FilterBoothResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| FilterBoothError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> FilterBoothResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check field ranges.
    pub fn validate(&self) -> FilterBoothResult<()> {
        let prefix = self.export_prefix.as_str();
        if prefix.is_empty() {
            return Err(FilterBoothError::config("export_prefix must be non-empty"));
        }
        if prefix
            .chars()
            .any(|c| c.is_whitespace() || c == '/' || c == '\\' || c.is_control())
        {
            return Err(FilterBoothError::config(
                "export_prefix must not contain whitespace or path separators",
            ));
        }
        if self.thumbnail_size == 0 {
            return Err(FilterBoothError::config("thumbnail_size must be >= 1"));
        }
        if self.max_display_pixels == 0 {
            return Err(FilterBoothError::config("max_display_pixels must be >= 1"));
        }
        if self.gallery_columns == 0 {
            return Err(FilterBoothError::config("gallery_columns must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
