//! Response data model.
//!
//! These types mirror the JSON document served by the footprint API. They
//! are parsed once and never mutated.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Response {
    /// Whether the request succeeded. Unsuccessful responses are not built.
    #[serde(default)]
    pub success: bool,
    /// Status code reported by the server.
    #[serde(default)]
    pub code: i32,
    /// Buildings in response order.
    #[serde(default)]
    pub data: Vec<Building>,
}

impl Response {
    /// Parse a response from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a response from raw JSON bytes.
    pub fn from_json_slice(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }

    /// Read and parse a response file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Total number of encoded faces across all buildings.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.data
            .iter()
            .flat_map(|building| &building.roomtypes)
            .map(|room_type| room_type.coordinates_base64s.len())
            .sum()
    }
}

/// A building ("dong") and its room types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Building {
    /// Room types in response order.
    #[serde(default)]
    pub roomtypes: Vec<RoomType>,
    /// Building metadata.
    #[serde(default)]
    pub meta: BuildingMeta,
}

/// Building metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildingMeta {
    /// Building id.
    #[serde(default)]
    pub bd_id: i64,
    /// Display name of the building.
    #[serde(rename = "동", default)]
    pub name: String,
    /// Ground height reported by the server.
    #[serde(rename = "지면높이", default)]
    pub ground_height: i64,
}

/// A room type: a set of encoded faces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoomType {
    /// Base64 vertex buffers, one per face.
    #[serde(rename = "coordinatesBase64s", default)]
    pub coordinates_base64s: Vec<String>,
    /// Room type metadata.
    #[serde(default)]
    pub meta: RoomTypeMeta,
}

/// Room type metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoomTypeMeta {
    /// Room type id.
    #[serde(rename = "룸타입id", default)]
    pub room_type_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "code": 200,
        "data": [
            {
                "roomtypes": [
                    { "coordinatesBase64s": ["AAAA", "BBBB"], "meta": { "룸타입id": 7 } },
                    { "coordinatesBase64s": [], "meta": { "룸타입id": 8 } }
                ],
                "meta": { "bd_id": 42, "동": "101동", "지면높이": 12 }
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let response = Response::from_json_str(SAMPLE).unwrap();

        assert!(response.success);
        assert_eq!(response.code, 200);
        assert_eq!(response.data.len(), 1);

        let building = &response.data[0];
        assert_eq!(building.meta.bd_id, 42);
        assert_eq!(building.meta.name, "101동");
        assert_eq!(building.meta.ground_height, 12);
        assert_eq!(building.roomtypes[0].meta.room_type_id, 7);
        assert_eq!(building.roomtypes[0].coordinates_base64s, ["AAAA", "BBBB"]);
        assert_eq!(response.face_count(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let response = Response::from_json_str(r#"{ "success": false }"#).unwrap();
        assert!(!response.success);
        assert!(response.data.is_empty());
        assert_eq!(response.face_count(), 0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let response =
            Response::from_json_str(r#"{ "success": true, "code": 0, "data": [], "extra": 1 }"#)
                .unwrap();
        assert!(response.success);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Response::from_json_str("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Response::load("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
