/// Crate-wide result alias.
pub type OgResult<T> = Result<T, OgError>;

/// Errors produced while configuring or running the preview pipeline.
#[derive(thiserror::Error, Debug)]
pub enum OgError {
    /// Missing or unreadable fonts, invalid site configuration, conflicting routes.
    #[error("configuration error: {0}")]
    Config(String),

    /// Style values the layout engine cannot resolve.
    #[error("layout error: {0}")]
    Layout(String),

    /// Painting or rasterization failure (glyph coverage, SVG parse, pixmap, PNG encode).
    #[error("render error: {0}")]
    Render(String),

    /// Configuration (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually I/O with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OgError {
    /// Build an [`OgError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`OgError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build an [`OgError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OgError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for failures that happen before any layout work begins.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
