//! Per-face geometry pipeline.

use glam::{Vec2, Vec3};

use crate::error::{DecodeError, DecodeResult};
use crate::indices::triangle_list_indices;
use crate::normals::recalculate_normals;
use crate::orientation::{AtlasRegion, classify};
use crate::texcoords::{VERTICES_PER_FACE, atlas_uvs};
use crate::tile_scale::{TileScale, estimate_tile_scale};
use crate::vertices::decode_points;

/// Renderable geometry for one encoded face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGeometry {
    /// Y-up vertex positions; every three form one triangle.
    pub positions: Vec<Vec3>,
    /// Identity triangle list indices.
    pub indices: Vec<u32>,
    /// Recalculated per-vertex normals.
    pub normals: Vec<Vec3>,
    /// Atlas texture coordinates, one per vertex.
    pub uvs: Vec<Vec2>,
    /// Atlas region chosen for each 6-vertex group.
    pub regions: Vec<AtlasRegion>,
    /// Texture repeat factor for the face material.
    pub tile_scale: TileScale,
}

impl FaceGeometry {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the face has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Decode a base64 face and build its geometry.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] for a bad payload, or
/// [`DecodeError::MalformedGeometry`] if the point count is not a multiple of 6.
pub fn build_face(encoded: &str) -> DecodeResult<FaceGeometry> {
    build_face_from_points(decode_points(encoded)?)
}

/// Build geometry from already decoded Y-up points.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedGeometry`] if the point count is not a
/// multiple of 6.
pub fn build_face_from_points(positions: Vec<Vec3>) -> DecodeResult<FaceGeometry> {
    if !positions.len().is_multiple_of(VERTICES_PER_FACE) {
        return Err(DecodeError::MalformedGeometry {
            vertex_count: positions.len(),
        });
    }

    let indices = triangle_list_indices(positions.len());
    let normals = recalculate_normals(&positions, &indices);

    // Each group is classified by the normal of its first vertex.
    let regions: Vec<AtlasRegion> = normals
        .iter()
        .step_by(VERTICES_PER_FACE)
        .map(|&normal| classify(normal))
        .collect();

    let uvs = atlas_uvs(&positions, &regions)?;
    let tile_scale = estimate_tile_scale(&positions);

    Ok(FaceGeometry {
        positions,
        indices,
        normals,
        uvs,
        regions,
        tile_scale,
    })
}
