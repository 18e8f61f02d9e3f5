//! Error taxonomy for theme state handling.
//!
//! None of these are fatal. The controller absorbs them at its boundary and
//! falls back to a safe default; only the validating string entry point hands
//! `InvalidPreference` back to its caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid theme preference '{0}' (expected light, dark or system)")]
    InvalidPreference(String),
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("platform color-scheme signal unavailable")]
    PlatformSignalUnavailable,
}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        ThemeError::StorageUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::StorageUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_preference_display() {
        let msg = ThemeError::InvalidPreference("blue".into()).to_string();
        assert!(msg.contains("'blue'"));
    }

    #[test]
    fn test_io_error_maps_to_storage_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ThemeError = io.into();
        assert!(matches!(err, ThemeError::StorageUnavailable(ref m) if m.contains("denied")));
    }
}
