use thiserror::Error;

/// A color token that could not be resolved to a canonical key.
///
/// Every variant carries the offending token so callers can report it and
/// move on to the next one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorError {
    #[error("invalid hex color {token:?}: {message}")]
    InvalidHex { token: String, message: String },
    #[error("invalid rgb color {token:?}: {message}")]
    InvalidRgb { token: String, message: String },
    #[error("unsupported color syntax {token:?}")]
    Unsupported { token: String },
}

impl ColorError {
    /// The token that failed to resolve.
    pub fn token(&self) -> &str {
        match self {
            ColorError::InvalidHex { token, .. }
            | ColorError::InvalidRgb { token, .. }
            | ColorError::Unsupported { token } => token,
        }
    }
}
