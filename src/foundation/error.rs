/// Convenience result type used across seedart.
pub type SeedArtResult<T> = Result<T, SeedArtError>;

/// Top-level error taxonomy.
///
/// Generation itself never fails; errors only come from configuration, rasterization and IO.
#[derive(thiserror::Error, Debug)]
pub enum SeedArtError {
    /// Invalid user-provided configuration or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// The output surface could not be produced (SVG parse, pixmap allocation, encoding).
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeedArtError {
    /// Build a [`SeedArtError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SeedArtError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SeedArtError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
