/// Convenience result type used across FilterBooth.
pub type FilterBoothResult<T> = Result<T, FilterBoothError>;

/// Top-level error taxonomy used by library APIs.
///
/// These are programmer/caller facing. The user-facing messages a session shows live in
/// [`crate::SessionError`].
#[derive(thiserror::Error, Debug)]
pub enum FilterBoothError {
    /// Invalid caller-provided data (unknown preset name, malformed effect text, bad sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Encoded image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A raster could not be rendered onto a surface.
    #[error("render error: {0}")]
    Render(String),

    /// A surface could not be encoded or handed to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FilterBoothError {
    /// Build a [`FilterBoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FilterBoothError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FilterBoothError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FilterBoothError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FilterBoothError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
