//! Baking the selected filter into a downloadable PNG.

pub(crate) mod sink;

use crate::{
    assets::decode::decode_image,
    foundation::{core::Dimensions, error::FilterBoothResult},
    presets::FilterPreset,
    render::pipeline::bake_png,
};

use self::sink::DownloadSink;

/// Suffix appended to every exported file name.
pub const EXPORT_SUFFIX: &str = "_Filtered.png";

/// `<prefix>_<PresetNameWithoutWhitespace>_Filtered.png`
pub fn export_file_name(prefix: &str, preset: &FilterPreset) -> String {
    format!("{prefix}_{}{EXPORT_SUFFIX}", preset.compact_name())
}

/// Result of a successful export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    /// Name handed to the sink.
    pub file_name: String,
    /// Pixel size of the exported image, equal to the source.
    pub dimensions: Dimensions,
    /// Encoded PNG size in bytes.
    pub byte_len: usize,
    /// Where the sink put the file.
    pub location: String,
}

/// Re-decode `encoded`, draw it once through `preset`, encode as PNG and hand it to `sink`.
///
/// Decode failures surface as `FilterBoothError::Decode`; everything after the decode surfaces
/// as the render, encode or sink error that caused it.
#[tracing::instrument(level = "debug", skip_all, fields(preset = preset.name()))]
pub fn export_image(
    encoded: &[u8],
    preset: &FilterPreset,
    prefix: &str,
    sink: &mut dyn DownloadSink,
) -> FilterBoothResult<ExportReceipt> {
    let source = decode_image(encoded)?;
    let (png, dimensions) = bake_png(&source, &preset.pipeline())?;
    let file_name = export_file_name(prefix, preset);
    let location = sink.save(&file_name, &png)?;
    Ok(ExportReceipt {
        file_name,
        dimensions,
        byte_len: png.len(),
        location,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/mod.rs"]
mod tests;
