//! Error types for decoding operations.

use std::fmt;

/// Errors that can occur while turning an encoded face into geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The face payload is not valid base64.
    InvalidBase64 { detail: String },
    /// The decoded point count is not a whole number of 6-vertex groups.
    MalformedGeometry { vertex_count: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64 { detail } => {
                write!(f, "invalid base64 payload: {detail}")
            }
            Self::MalformedGeometry { vertex_count } => {
                write!(
                    f,
                    "malformed geometry: {vertex_count} vertices is not a multiple of 6"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
