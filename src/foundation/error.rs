/// Convenience result type used across the crate.
pub type ClampResult<T> = Result<T, ClampError>;

/// Error taxonomy for the checked surfaces of the crate.
///
/// The clamp operation itself never fails; these errors only come out of
/// opt-in validation and text/JSON input handling.
#[derive(thiserror::Error, Debug)]
pub enum ClampError {
    /// Bounds or other caller-provided data failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A textual number could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl ClampError {
    /// Build a [`ClampError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClampError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`ClampError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
