//! Router error taxonomy.
//!
//! Expected failures (`BAD_ID`, `UNSUPPORTED`, `UNRESOLVABLE`) are ordinary
//! `Err` values. A failing resolver or enricher callback surfaces once, as
//! `PROVIDER_ERROR`, with the callback's error kept as the source.

use std::fmt;

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouterErrorCode {
    /// Input is not a strict `provider:kind:id` ref.
    BadId,
    /// No enricher is registered for the target provider.
    Unsupported,
    /// The resolver graph has no path to the target provider.
    Unresolvable,
    /// Reserved for enrichers; never raised by the router itself.
    NotFound,
    /// A resolver or enricher callback failed.
    ProviderError,
}

impl RouterErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadId => "BAD_ID",
            Self::Unsupported => "UNSUPPORTED",
            Self::Unresolvable => "UNRESOLVABLE",
            Self::NotFound => "NOT_FOUND",
            Self::ProviderError => "PROVIDER_ERROR",
        }
    }
}

impl fmt::Display for RouterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`MediaRouter`](crate::MediaRouter) operations.
#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct RouterError {
    pub code: RouterErrorCode,
    pub message: String,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl RouterError {
    pub fn new<S: Into<String>>(code: RouterErrorCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    pub fn bad_id<S: Into<String>>(message: S) -> Self {
        Self::new(RouterErrorCode::BadId, message)
    }

    pub fn unsupported<S: Into<String>>(message: S) -> Self {
        Self::new(RouterErrorCode::Unsupported, message)
    }

    pub fn unresolvable<S: Into<String>>(message: S) -> Self {
        Self::new(RouterErrorCode::Unresolvable, message)
    }

    /// For enrichers that want to report a missing item explicitly.
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::new(RouterErrorCode::NotFound, message)
    }

    pub fn provider_error<S: Into<String>>(message: S, cause: anyhow::Error) -> Self {
        Self {
            code: RouterErrorCode::ProviderError,
            message: message.into(),
            cause: Some(cause.into()),
        }
    }
}

/// Result type alias for router operations.
pub type RouterResult<T> = std::result::Result<T, RouterError>;
