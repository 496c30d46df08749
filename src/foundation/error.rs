/// Convenience result type used across scrollrig.
pub type ScrollrigResult<T> = Result<T, ScrollrigError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Configuration-time errors (`Validation`, `Property`) are surfaced
/// synchronously to the registering caller. Runtime degradations (missing
/// anchors, late ticks) are absorbed by the engine and never appear here.
#[derive(thiserror::Error, Debug)]
pub enum ScrollrigError {
    /// Invalid user-provided descriptor or range data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed trigger condition (bad anchor string, bad offsets).
    #[error("trigger error: {0}")]
    Trigger(String),

    /// Malformed property track (mismatched value kinds, non-finite values).
    #[error("property error: {0}")]
    Property(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollrigError {
    /// Build a [`ScrollrigError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollrigError::Trigger`] value.
    pub fn trigger(msg: impl Into<String>) -> Self {
        Self::Trigger(msg.into())
    }

    /// Build a [`ScrollrigError::Property`] value.
    pub fn property(msg: impl Into<String>) -> Self {
        Self::Property(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
