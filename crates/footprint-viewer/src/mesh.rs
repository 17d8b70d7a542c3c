//! Mesh conversion utilities for rendering footprint geometry in Bevy.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use footprint::FaceGeometry;

/// Convert face geometry to a Bevy mesh.
///
/// Atlas coordinates have their origin at the bottom-left of the texture;
/// Bevy samples from the top-left, so V is flipped.
pub fn convert_face(geometry: &FaceGeometry) -> Mesh {
    let positions: Vec<[f32; 3]> = geometry.positions.iter().map(|p| p.to_array()).collect();
    let normals: Vec<[f32; 3]> = geometry.normals.iter().map(|n| n.to_array()).collect();
    let uvs: Vec<[f32; 2]> = geometry.uvs.iter().map(|uv| [uv.x, 1.0 - uv.y]).collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(geometry.indices.clone()));

    mesh
}
