//! Index buffer generation.

/// Build the index buffer for an unshared triangle list.
///
/// Every triangle corner is its own vertex, so the vertex buffer already is
/// the triangle list and `index[i] == i`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn triangle_list_indices(vertex_count: usize) -> Vec<u32> {
    (0..vertex_count).map(|i| i as u32).collect()
}
