//! Build textured room geometry from building footprint API responses.
//!
//! This crate owns the response data model and the construction pass that
//! turns it into scene nodes through a [`MeshHost`]. Geometry decoding lives
//! in `footprint-decode`.
//!
//! # Example
//!
//! ```ignore
//! use footprint::{Construction, RecordingHost, Response};
//!
//! let response = Response::load("buildings.json")?;
//! let mut host = RecordingHost::new();
//! let mut construction = Construction::new();
//!
//! let report = construction.build(&response, &mut host, &"atlas".to_owned());
//! println!("{} faces built", report.faces_built);
//!
//! construction.release(&mut host);
//! ```

pub mod construct;
mod error;
pub mod host;
pub mod types;

pub use construct::{Construction, ConstructionReport, face_node_name};
pub use error::{Error, FaceError, Result};
pub use host::{MeshHost, NodeId, RecordedNode, RecordingHost};
pub use types::{Building, BuildingMeta, Response, RoomType, RoomTypeMeta};

// Re-export decode types for convenience.
pub use footprint_decode::{
    AtlasRegion, DecodeError, FaceGeometry, TileScale, build_face, build_face_from_points,
};
