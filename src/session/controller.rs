use std::sync::Arc;

use crate::{
    assets::decode::ImageFile,
    config::SessionConfig,
    export::{ExportReceipt, export_image, sink::DownloadSink},
    foundation::{
        core::{Dimensions, RasterRgba8},
        error::{FilterBoothError, FilterBoothResult},
    },
    presets::FilterPreset,
    render::preview::{
        GalleryTile, PreviewFrame, placeholder, placeholder_gallery, render_gallery,
        render_preview,
    },
    session::{
        error::SessionError,
        upload::{DecodeOutcome, UploadGeneration, UploadStatus, UploadTicket},
    },
};

/// A successfully decoded upload.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    /// Name of the uploaded file.
    pub file_name: String,
    /// Declared media type of the upload.
    pub media_type: String,
    /// The bytes as uploaded; export decodes these again.
    pub encoded: Arc<[u8]>,
    /// Straight-alpha pixels used by preview and gallery.
    pub raster: Arc<RasterRgba8>,
}

impl LoadedImage {
    /// Natural pixel size.
    pub fn dimensions(&self) -> Dimensions {
        self.raster.dimensions()
    }
}

/// Snapshot of everything a front end needs to draw the session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SessionView {
    /// Name of the selected preset.
    pub selected_filter: &'static str,
    /// CSS `filter` value of the selected preset.
    pub css_filter: String,
    /// `true` while a decode is in flight.
    pub is_loading: bool,
    /// File name of the loaded image.
    pub image_name: Option<String>,
    /// Pixel size of the loaded image.
    pub image_dimensions: Option<Dimensions>,
    /// Message of the last session error.
    pub error: Option<&'static str>,
    /// `true` when an export would produce a download.
    pub can_export: bool,
}

/// The single mutable state record behind the filter booth.
///
/// Every user action is a `&mut self` method. Views (preview, gallery, [`SessionView`]) are
/// recomputed from state on demand.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    loaded_image: Option<LoadedImage>,
    selected_filter: &'static FilterPreset,
    is_loading: bool,
    last_error: Option<SessionError>,
    generation: UploadGeneration,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_valid_config(SessionConfig::default())
    }
}

impl Session {
    /// Fresh session: no image, identity filter, no error.
    pub fn new(config: SessionConfig) -> FilterBoothResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: SessionConfig) -> Self {
        Self {
            config,
            loaded_image: None,
            selected_filter: FilterPreset::identity(),
            is_loading: false,
            last_error: None,
            generation: UploadGeneration::default(),
        }
    }

    /// Configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current image, if any.
    pub fn loaded_image(&self) -> Option<&LoadedImage> {
        self.loaded_image.as_ref()
    }

    /// The active preset.
    pub fn selected_filter(&self) -> &'static FilterPreset {
        self.selected_filter
    }

    /// `true` while the latest accepted upload is being decoded.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The most recent user-facing error.
    pub fn last_error(&self) -> Option<SessionError> {
        self.last_error
    }

    /// Generation of the most recently accepted upload.
    pub fn generation(&self) -> UploadGeneration {
        self.generation
    }

    /// Accept or reject a chosen file.
    ///
    /// A non-image file only records `InvalidFileType`. An image file clears the error, marks the
    /// session as loading and returns the ticket to decode.
    pub fn begin_upload(&mut self, file: ImageFile) -> Result<UploadTicket, SessionError> {
        if !file.is_image() {
            tracing::debug!(file = %file.name, media_type = %file.media_type, "upload rejected");
            return Err(self.fail(SessionError::InvalidFileType));
        }
        self.generation = self.generation.next();
        self.is_loading = true;
        self.last_error = None;
        tracing::debug!(file = %file.name, generation = self.generation.0, "upload accepted");
        Ok(UploadTicket::new(self.generation, file))
    }

    /// Apply a finished decode, unless a newer upload has been accepted since.
    #[tracing::instrument(level = "debug", skip_all, fields(generation = outcome.generation.0))]
    pub fn complete_upload(&mut self, outcome: DecodeOutcome) -> UploadStatus {
        if outcome.generation != self.generation {
            tracing::warn!(
                stale = outcome.generation.0,
                latest = self.generation.0,
                file = %outcome.file.name,
                "discarding stale decode"
            );
            return UploadStatus::Stale;
        }

        self.is_loading = false;
        match outcome.result {
            Ok(raster) => {
                tracing::debug!(file = %outcome.file.name, dims = %raster.dimensions(), "image loaded");
                self.loaded_image = Some(LoadedImage {
                    file_name: outcome.file.name,
                    media_type: outcome.file.media_type,
                    encoded: outcome.file.bytes,
                    raster: Arc::new(raster),
                });
                self.selected_filter = FilterPreset::identity();
                UploadStatus::Loaded
            }
            Err(err) => {
                tracing::debug!(file = %outcome.file.name, error = %err, "decode failed");
                self.loaded_image = None;
                self.last_error = Some(SessionError::ReadFailure);
                UploadStatus::Failed
            }
        }
    }

    /// Upload, decode and apply in one synchronous step.
    pub fn load_image(&mut self, file: ImageFile) -> Result<UploadStatus, SessionError> {
        let ticket = self.begin_upload(file)?;
        match self.complete_upload(ticket.decode()) {
            UploadStatus::Failed => Err(SessionError::ReadFailure),
            status => Ok(status),
        }
    }

    /// Make `preset` the active filter.
    pub fn select_filter(&mut self, preset: &'static FilterPreset) {
        if *self.selected_filter != *preset {
            tracing::debug!(
                from = self.selected_filter.name(),
                to = preset.name(),
                "filter selected"
            );
        }
        self.selected_filter = preset;
    }

    /// Resolve `name` leniently and select it. Unknown names leave the session untouched.
    pub fn select_filter_by_name(
        &mut self,
        name: &str,
    ) -> FilterBoothResult<&'static FilterPreset> {
        let preset = FilterPreset::lookup(name)?;
        self.select_filter(preset);
        Ok(preset)
    }

    /// Full-size view of the loaded image under the selected filter.
    ///
    /// Returns `None` without an image. When the image cannot be displayed the placeholder is
    /// returned and `DisplayFailure` recorded.
    pub fn preview(&mut self) -> Option<PreviewFrame> {
        let raster = Arc::clone(&self.loaded_image.as_ref()?.raster);
        let preset = self.selected_filter;
        let (raster, is_placeholder) =
            match render_preview(&raster, preset, self.config.max_display_pixels) {
                Ok(r) => (r, false),
                Err(err) => {
                    self.display_failed(&err);
                    (placeholder(), true)
                }
            };
        Some(PreviewFrame {
            preset,
            css_filter: preset.css_filter(),
            raster,
            is_placeholder,
        })
    }

    /// One thumbnail per preset, in preset order, with the selected one marked.
    ///
    /// Empty without an image.
    #[tracing::instrument(level = "debug", skip_all, fields(selected = self.selected_filter.name()))]
    pub fn gallery(&mut self) -> Vec<GalleryTile> {
        let Some(image) = self.loaded_image.as_ref() else {
            return Vec::new();
        };
        let raster = Arc::clone(&image.raster);
        match render_gallery(
            &raster,
            self.selected_filter,
            self.config.thumbnail_size,
            self.config.max_display_pixels,
        ) {
            Ok(tiles) => tiles,
            Err(err) => {
                self.display_failed(&err);
                placeholder_gallery(self.selected_filter)
            }
        }
    }

    /// Bake the selected filter into a PNG and hand it to `sink`.
    #[tracing::instrument(level = "debug", skip_all, fields(filter = self.selected_filter.name()))]
    pub fn export(&mut self, sink: &mut dyn DownloadSink) -> Result<ExportReceipt, SessionError> {
        let Some(image) = self.loaded_image.as_ref() else {
            return Err(self.fail(SessionError::MissingInputs));
        };
        let encoded = Arc::clone(&image.encoded);

        match export_image(
            &encoded,
            self.selected_filter,
            &self.config.export_prefix,
            sink,
        ) {
            Ok(receipt) => {
                tracing::info!(
                    file = %receipt.file_name,
                    dims = %receipt.dimensions,
                    bytes = receipt.byte_len,
                    "exported"
                );
                Ok(receipt)
            }
            Err(err @ FilterBoothError::Decode(_)) => {
                tracing::debug!(error = %err, "export re-decode failed");
                Err(self.fail(SessionError::ReadFailure))
            }
            Err(err) => {
                tracing::debug!(error = %err, "export failed");
                Err(self.fail(SessionError::SaveFailure))
            }
        }
    }

    /// Derived snapshot of the current state.
    pub fn view(&self) -> SessionView {
        SessionView {
            selected_filter: self.selected_filter.name(),
            css_filter: self.selected_filter.css_filter(),
            is_loading: self.is_loading,
            image_name: self.loaded_image.as_ref().map(|i| i.file_name.clone()),
            image_dimensions: self.loaded_image.as_ref().map(LoadedImage::dimensions),
            error: self.last_error.map(SessionError::message),
            can_export: self.loaded_image.is_some(),
        }
    }

    fn fail(&mut self, err: SessionError) -> SessionError {
        self.last_error = Some(err);
        err
    }

    fn display_failed(&mut self, err: &FilterBoothError) {
        tracing::debug!(error = %err, "display failed, showing placeholder");
        self.last_error = Some(SessionError::DisplayFailure);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
