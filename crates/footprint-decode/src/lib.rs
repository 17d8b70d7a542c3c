//! Decode building footprint vertex buffers into atlas-textured geometry.
//!
//! Faces arrive as base64 strings of packed `f32` triples. Each face is a
//! run of 6-vertex groups, one quad per group, written as two triangles that
//! share no vertices. This crate turns such a face into positions, an index
//! buffer, normals, texture-atlas UVs and a vertical tiling factor.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **User-controlled parallelism**: Faces are independent; the caller
//!   decides how to schedule them
//! - **Exact comparisons**: Orientation and UV layout use exact float
//!   equality, so results are bit-reproducible for identical input

mod error;
pub mod face;
pub mod indices;
pub mod normals;
pub mod orientation;
pub mod texcoords;
pub mod tile_scale;
pub mod vertices;

pub use error::{DecodeError, DecodeResult};
pub use face::{FaceGeometry, build_face, build_face_from_points};
pub use glam::{Vec2, Vec3};
pub use orientation::AtlasRegion;
pub use tile_scale::TileScale;
