//! Vertical texture tiling estimate.

use glam::{Vec2, Vec3};

/// Assumed storey height in world units.
pub const FLOOR_HEIGHT: f32 = 3.0;

/// Only the first face group is inspected.
pub const SAMPLED_VERTICES: usize = 6;

/// Texture repeat factor applied to a face material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileScale {
    /// Horizontal repeat count (always 1).
    pub horizontal: f32,
    /// Vertical repeat count (estimated storeys, at least 1).
    pub vertical: f32,
}

impl TileScale {
    /// A scale that does not repeat the texture.
    pub const ONE: Self = Self {
        horizontal: 1.0,
        vertical: 1.0,
    };

    /// The scale as a UV multiplier.
    #[must_use]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }
}

impl Default for TileScale {
    fn default() -> Self {
        Self::ONE
    }
}

/// Vertical extent of the first [`SAMPLED_VERTICES`] positions.
///
/// Returns 0 for an empty slice.
#[must_use]
pub fn sampled_height(positions: &[Vec3]) -> f32 {
    let sample = &positions[..positions.len().min(SAMPLED_VERTICES)];
    let Some(first) = sample.first() else {
        return 0.0;
    };

    let (min, max) = sample
        .iter()
        .fold((first.y, first.y), |(min, max), p| (min.min(p.y), max.max(p.y)));
    max - min
}

/// Estimate how many storeys the face spans and repeat the texture that often.
///
/// The storey count is `floor(height / FLOOR_HEIGHT)`, clamped to at least 1.
/// The first face group is assumed to span the full height of the room type.
#[must_use]
pub fn estimate_tile_scale(positions: &[Vec3]) -> TileScale {
    let floors = (sampled_height(positions) / FLOOR_HEIGHT).floor();
    // Also catches NaN heights.
    let vertical = if floors >= 1.0 { floors } else { 1.0 };

    TileScale {
        horizontal: 1.0,
        vertical,
    }
}
