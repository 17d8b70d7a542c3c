//! Face orientation classification.
//!
//! A face is assigned one of three atlas regions from the normal of its
//! first vertex. Horizontal faces (normal exactly up or down) are caps.
//! Walls are binned by their heading around the vertical axis, measured
//! clockwise from `forward` through `right`.
//!
//! Cap detection uses exact float equality. Near-horizontal faces that do
//! not normalize to exactly `(0, ±1, 0)` are treated as walls.

use glam::Vec3;

/// World forward axis.
pub const FORWARD: Vec3 = Vec3::Z;

/// World right axis.
pub const RIGHT: Vec3 = Vec3::X;

/// Inclusive heading range, in degrees, of walls textured from [`AtlasRegion::SideA`].
pub const SIDE_A_HEADING: std::ops::RangeInclusive<f32> = 180.0..=220.0;

/// Atlas region a face is textured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtlasRegion {
    /// Floors and ceilings.
    Cap,
    /// Walls facing into the [`SIDE_A_HEADING`] band.
    SideA,
    /// All other walls.
    SideB,
}

/// Angle in degrees between two vectors, in `[0, 180]`.
///
/// Returns 0 when either vector is (near) zero length.
#[must_use]
pub fn unsigned_angle(from: Vec3, to: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }

    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Heading of `normal` in degrees, in `[0, 360)`.
///
/// The unsigned angle from `forward` cannot tell left from right; normals on
/// the negative side of `right` are mirrored to `360 - angle`.
#[must_use]
pub fn heading(normal: Vec3, forward: Vec3, right: Vec3) -> f32 {
    let angle = unsigned_angle(forward, normal);
    if right.dot(normal) < 0.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Classify a face normal against explicit world axes.
#[must_use]
pub fn classify_with_axes(normal: Vec3, forward: Vec3, right: Vec3) -> AtlasRegion {
    if normal == Vec3::Y || normal == Vec3::NEG_Y {
        return AtlasRegion::Cap;
    }

    if SIDE_A_HEADING.contains(&heading(normal, forward, right)) {
        AtlasRegion::SideA
    } else {
        AtlasRegion::SideB
    }
}

/// Classify a face normal against [`FORWARD`] and [`RIGHT`].
#[must_use]
pub fn classify(normal: Vec3) -> AtlasRegion {
    classify_with_axes(normal, FORWARD, RIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall(degrees: f32) -> Vec3 {
        // Heading measured from +Z towards +X.
        let radians = degrees.to_radians();
        Vec3::new(radians.sin(), 0.0, radians.cos())
    }

    #[test]
    fn test_caps_ignore_axes() {
        for (forward, right) in [(FORWARD, RIGHT), (Vec3::X, Vec3::NEG_Z), (Vec3::ZERO, Vec3::ZERO)] {
            assert_eq!(classify_with_axes(Vec3::Y, forward, right), AtlasRegion::Cap);
            assert_eq!(classify_with_axes(Vec3::NEG_Y, forward, right), AtlasRegion::Cap);
        }
    }

    #[test]
    fn test_near_up_is_not_a_cap() {
        let normal = Vec3::new(0.0, 1.0, 1e-4).normalize();
        assert_ne!(normal, Vec3::Y);
        assert_ne!(classify(normal), AtlasRegion::Cap);
    }

    #[test]
    fn test_unsigned_angle() {
        assert!(unsigned_angle(FORWARD, FORWARD).abs() < 1e-3);
        assert!((unsigned_angle(FORWARD, Vec3::X) - 90.0).abs() < 1e-3);
        assert!((unsigned_angle(FORWARD, Vec3::NEG_X) - 90.0).abs() < 1e-3);
        assert!((unsigned_angle(FORWARD, Vec3::new(0.0, 0.0, -2.0)) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_unsigned_angle_zero_vector() {
        assert_eq!(unsigned_angle(FORWARD, Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_heading_mirrors_left_half() {
        // 170 degrees from forward on the left side becomes 190.
        let normal = Vec3::new(-(170.0f32.to_radians().sin()), 0.0, 170.0f32.to_radians().cos());
        assert!((unsigned_angle(FORWARD, normal) - 170.0).abs() < 1e-3);
        assert!((heading(normal, FORWARD, RIGHT) - 190.0).abs() < 1e-3);
    }

    #[test]
    fn test_left_side_band_is_side_a() {
        let normal = Vec3::new(-(170.0f32.to_radians().sin()), 0.0, 170.0f32.to_radians().cos());
        assert_eq!(classify(normal), AtlasRegion::SideA);
        assert_eq!(classify(wall(210.0)), AtlasRegion::SideA);
    }

    #[test]
    fn test_band_upper_edge_is_inclusive() {
        assert!(SIDE_A_HEADING.contains(&220.0));
        assert!(!SIDE_A_HEADING.contains(&220.001));
        assert_eq!(classify(wall(219.5)), AtlasRegion::SideA);
        assert_eq!(
            classify_with_axes(wall(219.9), FORWARD, RIGHT),
            AtlasRegion::SideA
        );
    }

    #[test]
    fn test_outside_band_is_side_b() {
        for degrees in [0.0, 45.0, 90.0, 150.0, 179.0, 221.0, 270.0, 315.0] {
            assert_eq!(classify(wall(degrees)), AtlasRegion::SideB, "{degrees}");
        }
    }

    #[test]
    fn test_same_angle_right_side_is_side_b() {
        // Unsigned angle 170 on the right side stays 170.
        let normal = Vec3::new(170.0f32.to_radians().sin(), 0.0, 170.0f32.to_radians().cos());
        assert_eq!(classify(normal), AtlasRegion::SideB);
    }

    #[test]
    fn test_zero_normal_is_side_b() {
        assert_eq!(classify(Vec3::ZERO), AtlasRegion::SideB);
    }
}
