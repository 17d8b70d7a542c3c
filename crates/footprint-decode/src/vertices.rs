//! Vertex buffer decoding.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use glam::Vec3;

use crate::error::{DecodeError, DecodeResult};

/// Size of one packed point: three little-endian `f32`s.
pub const BYTES_PER_POINT: usize = 12;

/// Standard alphabet that tolerates non-zero bits in the final symbol.
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a base64 vertex buffer into points.
///
/// ASCII whitespace anywhere in the payload is skipped, so line-wrapped
/// buffers decode the same as unwrapped ones.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] if the payload is not valid base64.
pub fn decode_points(encoded: &str) -> DecodeResult<Vec<Vec3>> {
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let packed = BASE64
        .decode(compact)
        .map_err(|e| DecodeError::InvalidBase64 {
            detail: e.to_string(),
        })?;
    Ok(unpack_points(&packed))
}

/// Unpack raw point data.
///
/// Input format: `N * 12` bytes, each point stored as `[x, z, y]` little-endian
/// `f32`s (Z-up). Output points are Y-up `(x, y, z)`.
///
/// A trailing partial point is dropped.
#[must_use]
pub fn unpack_points(packed: &[u8]) -> Vec<Vec3> {
    packed
        .chunks_exact(BYTES_PER_POINT)
        .map(|chunk| {
            let x = read_f32(chunk, 0);
            let z = read_f32(chunk, 4);
            let y = read_f32(chunk, 8);
            Vec3::new(x, y, z)
        })
        .collect()
}

fn read_f32(chunk: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        chunk[offset],
        chunk[offset + 1],
        chunk[offset + 2],
        chunk[offset + 3],
    ])
}
