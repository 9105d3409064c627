//! Error handling for fxgrid
//!
//! The schema and grid layers are deliberately permissive (unknown names
//! degrade to defaults, malformed parameter blobs become empty maps), so the
//! only real failures live at the payload envelope: a preset array that is
//! not valid JSON at all, or one that cannot be re-encoded.

use thiserror::Error;

/// Result type alias for fxgrid operations
pub type Result<T> = std::result::Result<T, FxGridError>;

/// Main error type for fxgrid operations
#[derive(Error, Debug)]
pub enum FxGridError {
    #[error("failed to decode effect payload: {source}")]
    PayloadDecode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode effect payload: {source}")]
    PayloadEncode {
        #[source]
        source: serde_json::Error,
    },
}

impl FxGridError {
    /// Stable code for API layers that map errors onto wire responses
    pub fn error_code(&self) -> &'static str {
        match self {
            FxGridError::PayloadDecode { .. } => "PAYLOAD_DECODE",
            FxGridError::PayloadEncode { .. } => "PAYLOAD_ENCODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FxGridError::PayloadDecode { source: bad };
        assert_eq!(err.error_code(), "PAYLOAD_DECODE");
    }

    #[test]
    fn test_display_includes_cause() {
        let bad = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err = FxGridError::PayloadDecode { source: bad };
        assert!(err.to_string().starts_with("failed to decode effect payload"));
    }
}
