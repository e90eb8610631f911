const INVALID_FILE_TYPE: &str = "Please choose an image file.";
const READ_FAILURE: &str = "The image could not be read. Please try another file.";
const DISPLAY_FAILURE: &str = "The image could not be displayed. Please try another file.";
const MISSING_INPUTS: &str = "Load an image and choose a filter before downloading.";
const SAVE_FAILURE: &str = "The filtered image could not be saved.";

/// User-facing session errors. Each carries a fixed message.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The chosen file is not declared as an image.
    #[error("{}", INVALID_FILE_TYPE)]
    InvalidFileType,

    /// The file (or its stored bytes at export time) could not be decoded.
    #[error("{}", READ_FAILURE)]
    ReadFailure,

    /// The decoded image could not be rendered for display.
    #[error("{}", DISPLAY_FAILURE)]
    DisplayFailure,

    /// Export was requested without a loaded image.
    #[error("{}", MISSING_INPUTS)]
    MissingInputs,

    /// The filtered image could not be encoded or handed to the download sink.
    #[error("{}", SAVE_FAILURE)]
    SaveFailure,
}

impl SessionError {
    /// The fixed message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidFileType => INVALID_FILE_TYPE,
            Self::ReadFailure => READ_FAILURE,
            Self::DisplayFailure => DISPLAY_FAILURE,
            Self::MissingInputs => MISSING_INPUTS,
            Self::SaveFailure => SAVE_FAILURE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/error.rs"]
mod tests;
