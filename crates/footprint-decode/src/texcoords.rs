//! Texture atlas coordinate generation.
//!
//! The atlas texture is split into three columns in its upper half:
//!
//! | Region            | u range      | v range    |
//! |-------------------|--------------|------------|
//! | [`AtlasRegion::SideA`] | `[0, 0.5]`    | `[0.5, 1]` |
//! | [`AtlasRegion::SideB`] | `[0.5, 0.75]` | `[0.5, 1]` |
//! | [`AtlasRegion::Cap`]   | `[0.75, 1]`   | `[0.5, 1]` |
//!
//! The lower half of the atlas is never referenced.

use glam::{Vec2, Vec3};

use crate::error::{DecodeError, DecodeResult};
use crate::orientation::AtlasRegion;

/// Vertices per quad (two unshared triangles).
pub const VERTICES_PER_FACE: usize = 6;

/// Full-quad UVs for one 6-vertex group.
///
/// The first triangle is always `(1,0), (0,0), (0,1)`. The second triangle's
/// layout depends on which corner of the first triangle it starts on, which is
/// detected by exact position equality.
#[must_use]
pub fn base_pattern(group: &[Vec3; VERTICES_PER_FACE]) -> [Vec2; VERTICES_PER_FACE] {
    let first = [Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)];

    let second = if group[3] == group[2] {
        [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0)]
    } else if group[3] == group[0] {
        [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)]
    } else {
        [Vec2::new(1.0, 1.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]
    };

    [
        first[0], first[1], first[2], second[0], second[1], second[2],
    ]
}

/// Remap a full-quad UV into the atlas region.
#[must_use]
pub fn remap(uv: Vec2, region: AtlasRegion) -> Vec2 {
    let v = (uv.y + 1.0) * 0.5;
    let u = match region {
        AtlasRegion::Cap => (uv.x + 3.0) * 0.25,
        AtlasRegion::SideA => uv.x * 0.5,
        AtlasRegion::SideB => uv.x * 0.25 + 0.5,
    };
    Vec2::new(u, v)
}

/// Atlas UVs for one 6-vertex group.
#[must_use]
pub fn group_uvs(group: &[Vec3; VERTICES_PER_FACE], region: AtlasRegion) -> [Vec2; VERTICES_PER_FACE] {
    base_pattern(group).map(|uv| remap(uv, region))
}

/// Generate atlas UVs for a whole face.
///
/// `regions` holds one entry per 6-vertex group of `positions`.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedGeometry`] if `positions` is not a whole
/// number of groups or `regions` does not have one entry per group.
pub fn atlas_uvs(positions: &[Vec3], regions: &[AtlasRegion]) -> DecodeResult<Vec<Vec2>> {
    if !positions.len().is_multiple_of(VERTICES_PER_FACE)
        || positions.len() / VERTICES_PER_FACE != regions.len()
    {
        return Err(DecodeError::MalformedGeometry {
            vertex_count: positions.len(),
        });
    }

    let mut uvs = Vec::with_capacity(positions.len());
    for (chunk, &region) in positions.chunks_exact(VERTICES_PER_FACE).zip(regions) {
        let group: &[Vec3; VERTICES_PER_FACE] =
            chunk.try_into().map_err(|_| DecodeError::MalformedGeometry {
                vertex_count: positions.len(),
            })?;
        uvs.extend(group_uvs(group, region));
    }

    Ok(uvs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const A: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const B: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const C: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    const D: Vec3 = Vec3::new(1.0, 0.0, 1.0);

    fn uv(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn test_base_pattern_starts_on_third_corner() {
        let pattern = base_pattern(&[A, B, C, C, D, A]);
        assert_eq!(
            pattern,
            [uv(1.0, 0.0), uv(0.0, 0.0), uv(0.0, 1.0), uv(0.0, 1.0), uv(1.0, 1.0), uv(1.0, 0.0)]
        );
    }

    #[test]
    fn test_base_pattern_starts_on_first_corner() {
        let pattern = base_pattern(&[A, B, C, A, C, D]);
        assert_eq!(
            pattern[3..],
            [uv(1.0, 0.0), uv(0.0, 1.0), uv(1.0, 1.0)]
        );
    }

    #[test]
    fn test_base_pattern_fallback() {
        let pattern = base_pattern(&[A, B, C, D, A, C]);
        assert_eq!(
            pattern[3..],
            [uv(1.0, 1.0), uv(1.0, 0.0), uv(0.0, 1.0)]
        );
    }

    #[test]
    fn test_base_pattern_third_corner_wins_over_first() {
        // Degenerate group where corners 0 and 2 coincide.
        let pattern = base_pattern(&[A, B, A, A, D, C]);
        assert_eq!(pattern[3], uv(0.0, 1.0));
    }

    #[test]
    fn test_remap_cap_origin() {
        assert_eq!(remap(uv(0.0, 0.0), AtlasRegion::Cap), uv(0.75, 0.5));
        assert_eq!(remap(uv(1.0, 1.0), AtlasRegion::Cap), uv(1.0, 1.0));
    }

    #[test]
    fn test_remap_side_a() {
        assert_eq!(remap(uv(0.0, 0.0), AtlasRegion::SideA), uv(0.0, 0.5));
        assert_eq!(remap(uv(1.0, 1.0), AtlasRegion::SideA), uv(0.5, 1.0));
    }

    #[test]
    fn test_remap_side_b() {
        assert_eq!(remap(uv(0.0, 0.0), AtlasRegion::SideB), uv(0.5, 0.5));
        assert_eq!(remap(uv(1.0, 1.0), AtlasRegion::SideB), uv(0.75, 1.0));
    }

    #[test]
    fn test_cap_group_vertex_one() {
        let uvs = group_uvs(&[A, B, C, C, D, A], AtlasRegion::Cap);
        assert_eq!(uvs[1], uv(0.75, 0.5));
    }

    #[test]
    fn test_atlas_uvs_per_group_region() {
        let positions = [A, B, C, C, D, A, A, B, C, A, C, D];
        let uvs = atlas_uvs(&positions, &[AtlasRegion::SideA, AtlasRegion::Cap]).unwrap();

        assert_eq!(uvs.len(), 12);
        assert!(uvs[..6].iter().all(|uv| uv.x <= 0.5));
        assert!(uvs[6..].iter().all(|uv| uv.x >= 0.75));
    }

    #[test]
    fn test_atlas_uvs_rejects_partial_group() {
        let result = atlas_uvs(&[A, B, C, D], &[AtlasRegion::Cap]);
        assert_eq!(result, Err(DecodeError::MalformedGeometry { vertex_count: 4 }));
    }

    #[test]
    fn test_atlas_uvs_rejects_region_mismatch() {
        let result = atlas_uvs(&[A, B, C, C, D, A], &[]);
        assert!(matches!(result, Err(DecodeError::MalformedGeometry { .. })));
    }

    fn region() -> impl Strategy<Value = AtlasRegion> {
        prop_oneof![
            Just(AtlasRegion::Cap),
            Just(AtlasRegion::SideA),
            Just(AtlasRegion::SideB),
        ]
    }

    proptest! {
        #[test]
        fn uvs_stay_in_upper_half(
            coords in proptest::collection::vec(-4i8..4, 18),
            region in region(),
        ) {
            let points: Vec<Vec3> = coords
                .chunks_exact(3)
                .map(|c| Vec3::new(f32::from(c[0]), f32::from(c[1]), f32::from(c[2])))
                .collect();
            let uvs = atlas_uvs(&points, &[region]).unwrap();

            for uv in uvs {
                prop_assert!((0.0..=1.0).contains(&uv.x));
                prop_assert!((0.5..=1.0).contains(&uv.y));
            }
        }
    }
}
