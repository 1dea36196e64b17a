/// Convenience result type used across sashgrid.
pub type SashgridResult<T> = Result<T, SashgridError>;

/// Error taxonomy for the fallible boundary (parsing, settings, validation).
///
/// The geometry functions themselves never fail; they degrade to empty output.
#[derive(thiserror::Error, Debug)]
pub enum SashgridError {
    /// Invalid item, divider, or settings data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SashgridError {
    /// Build a [`SashgridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SashgridError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
