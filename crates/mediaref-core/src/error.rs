//! Common error type for the mediaref domain types.
//!
//! Grammar-level parsing never fails with an error (it returns `None` or an
//! empty id set). This type covers the strict entry points: `FromStr` impls on
//! the domain enums, validated newtype construction, and configuration loading.

/// Common error type for mediaref.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The string does not name one of the known providers.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// The string does not name a content kind.
    #[error("Unknown kind: {0}")]
    UnknownKind(String),

    /// A value failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new Validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
