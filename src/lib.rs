//! FilterBooth applies a fixed set of CSS-style filter presets to a single image.
//!
//! A [`Session`] holds the whole state: at most one loaded image and the selected preset. From
//! that state it derives a full-size preview, a gallery with one thumbnail per preset, and an
//! export that bakes the selected filter into a PNG handed to a [`DownloadSink`].
//!
//! # Pipeline overview
//!
//! 1. **Upload**: `ImageFile -> UploadTicket -> DecodeOutcome` (decode may run on any thread)
//! 2. **Compile**: `FilterPreset -> FxPipeline` (adjacent color ops fold into one 4x5 matrix)
//! 3. **Render**: `RasterRgba8 + FxPipeline -> RasterRgba8` on an off-screen premultiplied surface
//! 4. **Export**: re-decode, draw once through the pipeline, encode PNG, save
//!
//! Filter math follows the CSS Filter Effects definitions (`grayscale`, `sepia`, `saturate`,
//! `hue-rotate`, `contrast`, `brightness`, `blur`).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod effects;
mod export;
mod foundation;
mod presets;
mod render;
mod session;

pub use assets::decode::{
    IMAGE_MEDIA_PREFIX, ImageFile, UNKNOWN_MEDIA_TYPE, decode_image, is_image_media_type,
    media_type_for_path,
};
pub use config::{DEFAULT_EXPORT_PREFIX, SessionConfig};
pub use effects::blur::{blur_radius_for_sigma, blur_rgba8_premul};
pub use effects::chain::{EffectChain, FxPipeline, PassFx, compile_effects, css_filter};
pub use effects::matrix::ColorMatrix;
pub use effects::op::{EffectOp, parse_effect};
pub use export::sink::{DirectorySink, Download, DownloadSink, InMemorySink};
pub use export::{EXPORT_SUFFIX, ExportReceipt, export_file_name, export_image};
pub use foundation::core::{Dimensions, RasterRgba8};
pub use foundation::error::{FilterBoothError, FilterBoothResult};
pub use presets::{FilterPreset, PRESETS};
pub use render::pipeline::{bake_png, render_filtered};
pub use render::preview::{
    GalleryTile, PLACEHOLDER_SIZE, PreviewFrame, check_displayable, contact_sheet, placeholder,
    placeholder_gallery, render_gallery, render_preview, thumbnail,
};
pub use render::surface::{MAX_SURFACE_EDGE, Surface};
pub use session::controller::{LoadedImage, Session, SessionView};
pub use session::error::SessionError;
pub use session::upload::{DecodeOutcome, UploadGeneration, UploadStatus, UploadTicket};
