/// Convenience result type used across the public API.
pub type StoryResult<T> = Result<T, StoryError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for story compilation.
///
/// Only [`StoryError::MalformedInput`] is produced by the compiler itself. Missing optional
/// fields and unresolvable (transient) media addresses are absorbed per element and never
/// surface here.
pub enum StoryError {
    /// The document model violates a structural rule and cannot be compiled at all.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Render configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::MalformedInput`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Build a [`StoryError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`StoryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is a fatal structural problem with the input document.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
