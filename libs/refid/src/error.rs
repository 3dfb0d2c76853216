//! Error types for RefId decoding and validation.

use thiserror::Error;

/// Errors that can occur when decoding or validating a RefId.
///
/// Every variant describes bad input, never an internal fault. Callers that
/// receive a RefId from a URL or form should answer "not found" or
/// "bad request" rather than surfacing a server error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefIdError {
    /// Binary input was not exactly the wire size.
    #[error("refid must be exactly {expected} bytes long, got {actual} bytes")]
    InvalidLength { expected: usize, actual: usize },

    /// Text input contained a symbol outside the encoding's alphabet.
    #[error("invalid {encoding} refid encoding: {reason}")]
    InvalidEncoding {
        encoding: &'static str,
        reason: String,
    },

    /// Native text input did not have exactly the encoded length.
    #[error("native refid must be exactly {expected} symbols long, got {actual}")]
    SymbolCount { expected: usize, actual: usize },

    /// Text input decoded cleanly but to the wrong number of bytes.
    #[error("{encoding} refid decoded to {actual} bytes, expected {expected}")]
    DecodedLength {
        encoding: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The RefId is well formed but carries the wrong tag.
    #[error("refid tag mismatch: expected {expected}, got {actual}")]
    TagMismatch { expected: u8, actual: u8 },

    /// A caller supplied requirement rejected the RefId.
    #[error("refid requirement failed: {0}")]
    Requirement(String),

    /// A database driver handed over a value that is neither text nor bytes.
    #[error("unsupported scan source type: {0}")]
    UnsupportedScanType(&'static str),
}

impl RefIdError {
    /// Returns true if the RefId decoded but was of the wrong entity type.
    pub fn is_tag_mismatch(&self) -> bool {
        matches!(self, RefIdError::TagMismatch { .. })
    }

    /// Returns true if the input had the wrong length, binary or decoded.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            RefIdError::InvalidLength { .. }
                | RefIdError::SymbolCount { .. }
                | RefIdError::DecodedLength { .. }
        )
    }

    /// Returns true if a textual encoding could not be decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            RefIdError::InvalidEncoding { .. }
                | RefIdError::SymbolCount { .. }
                | RefIdError::DecodedLength { .. }
        )
    }

    pub(crate) fn encoding(encoding: &'static str, reason: impl Into<String>) -> Self {
        RefIdError::InvalidEncoding {
            encoding,
            reason: reason.into(),
        }
    }
}
