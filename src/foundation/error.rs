/// Convenience result type used across Parallax.
pub type ParallaxResult<T> = Result<T, ParallaxError>;

/// Top-level error taxonomy used by stage APIs.
///
/// Transient per-frame conditions (upstream not ready, missing texture) are
/// not errors; they surface as [`crate::FrameStatus::Skipped`] from the render
/// path. The variants here cover real failures.
#[derive(thiserror::Error, Debug)]
pub enum ParallaxError {
    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while reading or migrating a settings snapshot.
    #[error("settings error: {0}")]
    Settings(String),

    /// GPU resource acquisition or upload failed in the backend.
    #[error("resource error: {0}")]
    Resource(String),

    /// Wrapped lower-level error from dependencies or the host.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ParallaxError {
    /// Build a [`ParallaxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ParallaxError::Settings`] value.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    /// Build a [`ParallaxError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }
}
