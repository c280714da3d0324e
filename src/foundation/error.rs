/// Convenience result type used across prosvg.
pub type ProsvgResult<T> = Result<T, ProsvgError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ProsvgError {
    /// Invalid user-provided configuration (fps, canvas, sample counts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Degenerate geometry: caller contract violations such as a polygon with fewer than three
    /// vertices, or cloning a shape that has no name.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors while building or driving timelines.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while serializing or rasterizing a scene snapshot.
    #[error("render error: {0}")]
    Render(String),

    /// Errors raised by frame sinks (for example the `ffmpeg` subprocess).
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProsvgError {
    /// Build a [`ProsvgError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ProsvgError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ProsvgError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ProsvgError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ProsvgError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`ProsvgError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
