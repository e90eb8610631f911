use crate::{
    assets::decode::{ImageFile, decode_image},
    foundation::{core::RasterRgba8, error::FilterBoothError},
};

/// Identifies one accepted upload. Later uploads always carry a larger generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadGeneration(pub u64);

impl UploadGeneration {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// An accepted upload waiting to be decoded.
///
/// Produced by `Session::begin_upload`. Decoding touches no session state, so the ticket can be
/// moved to any thread.
#[derive(Debug)]
pub struct UploadTicket {
    generation: UploadGeneration,
    file: ImageFile,
}

impl UploadTicket {
    pub(crate) fn new(generation: UploadGeneration, file: ImageFile) -> Self {
        Self { generation, file }
    }

    /// Generation assigned when the upload was accepted.
    pub fn generation(&self) -> UploadGeneration {
        self.generation
    }

    /// Decode the file into a raster.
    pub fn decode(self) -> DecodeOutcome {
        let result = decode_image(&self.file.bytes);
        DecodeOutcome {
            generation: self.generation,
            file: self.file,
            result,
        }
    }
}

/// The finished decode for one ticket, ready for `Session::complete_upload`.
#[derive(Debug)]
pub struct DecodeOutcome {
    pub(crate) generation: UploadGeneration,
    pub(crate) file: ImageFile,
    pub(crate) result: Result<RasterRgba8, FilterBoothError>,
}

impl DecodeOutcome {
    /// Generation of the ticket this outcome came from.
    pub fn generation(&self) -> UploadGeneration {
        self.generation
    }

    /// `true` when the file decoded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// What `Session::complete_upload` did with an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStatus {
    /// The image is now the loaded image.
    Loaded,
    /// Decoding failed; the session records `ReadFailure`.
    Failed,
    /// A newer upload was started; the outcome was discarded.
    Stale,
}

#[cfg(test)]
#[path = "../../tests/unit/session/upload.rs"]
mod tests;
