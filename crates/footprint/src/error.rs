//! Error types for the footprint crate.

use std::fmt;

use footprint_decode::DecodeError;

/// Result type for footprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a response.
#[derive(Debug)]
pub enum Error {
    /// Reading the response file failed.
    Io {
        /// The path that failed.
        path: String,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The response document is not valid JSON for the expected shape.
    Json(serde_json::Error),
    /// Face decoding failed.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            Error::Json(e) => write!(f, "failed to parse response: {e}"),
            Error::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Json(e) => Some(e),
            Error::Decode(e) => Some(e),
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

/// A face that could not be built, with enough context to find it in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceError {
    /// `bd_id` of the building.
    pub building_id: i64,
    /// `룸타입id` of the room type.
    pub room_type_id: i64,
    /// Position of the face within the room type.
    pub face_index: usize,
    /// Why the face failed.
    pub error: DecodeError,
}

impl fmt::Display for FaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "building {} room type {} face {}: {}",
            self.building_id, self.room_type_id, self.face_index, self.error
        )
    }
}

impl std::error::Error for FaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
