//! Per-vertex normal recalculation.

use glam::Vec3;

/// Recalculate per-vertex normals for a triangle list.
///
/// Each vertex accumulates the cross product of every triangle that
/// references it; the sum is then normalized. Vertices not shared between
/// triangles therefore carry the normal of their single triangle.
///
/// Indices that fall outside `positions` are ignored, as is a trailing
/// partial triangle.
#[must_use]
pub fn recalculate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
        let (Some(&pa), Some(&pb), Some(&pc)) =
            (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };

        let face = (pb - pa).cross(pc - pa);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }

    normals.iter_mut().for_each(|n| *n = normalize_exact(*n));
    normals
}

/// Normalize by dividing through the length.
///
/// Dividing (rather than multiplying by the reciprocal) keeps axis-aligned
/// normals exact, e.g. `(0, 4, 0)` becomes exactly `(0, 1, 0)`. A zero vector
/// stays zero.
#[must_use]
pub fn normalize_exact(v: Vec3) -> Vec3 {
    let length = v.length();
    if length > 0.0 && length.is_finite() {
        v / length
    } else {
        Vec3::ZERO
    }
}
