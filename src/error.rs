//! Error types for emoji_kit.
//!
//! Rendering never reports errors: a token that cannot be resolved or loaded
//! falls back to its text glyph. Only configuration loading, storage
//! backends, style parsing and the asset-table generator return [`Result`].

use std::io;

/// Result type alias for emoji_kit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for emoji_kit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from file-backed storage or the asset scanner.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Malformed JSON in a storage file or asset table.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed TOML configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// A style name outside the known set.
    #[error("unknown emoji style: {0}")]
    UnknownStyle(String),
    /// Persisted storage is not available in this environment.
    #[error("persisted storage unavailable")]
    StorageUnavailable,
    /// The asset table could not be built or parsed.
    #[error("emoji map error: {0}")]
    EmojiMap(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownStyle("sparkly".to_string());
        assert!(err.to_string().contains("sparkly"));

        let err = Error::StorageUnavailable;
        assert_eq!(err.to_string(), "persisted storage unavailable");

        let err = Error::EmojiMap("no assets".to_string());
        assert!(err.to_string().contains("no assets"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
