//! Scene construction from a response.
//!
//! Walks buildings, room types and faces in response order, builds each
//! face's geometry, and hands it to a [`MeshHost`]. A face that fails to
//! decode is reported and left out; it never affects its siblings.
//!
//! The layout created in the host is:
//!
//! ```text
//! <building name>            one root per (building, room type) pair
//! ├── RoomTypes 0            one child per face
//! ├── RoomTypes 1
//! └── ...
//! ```

use footprint_decode::{FaceGeometry, build_face};
use glam::Vec3;

use crate::error::FaceError;
use crate::host::MeshHost;
use crate::types::Response;

/// Name given to the node of the face at `index` within its room type.
#[must_use]
pub fn face_node_name(index: usize) -> String {
    format!("RoomTypes {index}")
}

/// Summary of one construction pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructionReport {
    /// Buildings visited.
    pub buildings: usize,
    /// Room types visited.
    pub room_types: usize,
    /// Faces that were built and attached.
    pub faces_built: usize,
    /// Faces that were left out.
    pub failures: Vec<FaceError>,
    /// Axis-aligned bounds of every built vertex, as `(min, max)`.
    pub bounds: Option<(Vec3, Vec3)>,
}

impl ConstructionReport {
    /// Number of faces that were left out.
    #[must_use]
    pub fn faces_failed(&self) -> usize {
        self.failures.len()
    }

    fn include(&mut self, geometry: &FaceGeometry) {
        for &p in &geometry.positions {
            self.bounds = Some(match self.bounds {
                Some((min, max)) => (min.min(p), max.max(p)),
                None => (p, p),
            });
        }
    }
}

/// Nodes created by a construction pass.
///
/// The construction owns its root handles; [`Construction::release`]
/// destroys them. Nothing else keeps track of created nodes.
#[derive(Debug)]
pub struct Construction<T> {
    roots: Vec<T>,
}

impl<T> Default for Construction<T> {
    fn default() -> Self {
        Self { roots: Vec::new() }
    }
}

impl<T: Clone> Construction<T> {
    /// Create an empty construction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root handles, one per (building, room type) pair.
    #[must_use]
    pub fn roots(&self) -> &[T] {
        &self.roots
    }

    /// Whether nothing is currently built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Build `response` into `host`.
    ///
    /// Anything previously built by this construction is released first.
    /// Unsuccessful responses build nothing.
    pub fn build<H>(
        &mut self,
        response: &Response,
        host: &mut H,
        material: &H::Material,
    ) -> ConstructionReport
    where
        H: MeshHost<Handle = T>,
    {
        self.release(host);

        let mut report = ConstructionReport::default();
        if !response.success {
            tracing::warn!(
                "Response not successful (code {}), nothing to build",
                response.code
            );
            return report;
        }

        for building in &response.data {
            report.buildings += 1;
            tracing::debug!(
                "Building {} ({}): {} room types",
                building.meta.bd_id,
                building.meta.name,
                building.roomtypes.len()
            );

            for room_type in &building.roomtypes {
                report.room_types += 1;

                let root = host.create_child(None, &building.meta.name);
                self.roots.push(root.clone());

                for (face_index, encoded) in room_type.coordinates_base64s.iter().enumerate() {
                    let geometry = match build_face(encoded) {
                        Ok(geometry) => geometry,
                        Err(error) => {
                            let failure = FaceError {
                                building_id: building.meta.bd_id,
                                room_type_id: room_type.meta.room_type_id,
                                face_index,
                                error,
                            };
                            tracing::warn!("Skipping face: {}", failure);
                            report.failures.push(failure);
                            continue;
                        }
                    };

                    let node = host.create_child(Some(&root), &face_node_name(face_index));
                    host.attach_geometry(&node, &geometry);
                    host.attach_material(&node, material, geometry.tile_scale);

                    report.include(&geometry);
                    report.faces_built += 1;
                }
            }
        }

        tracing::info!(
            "Built {} faces across {} buildings and {} room types ({} skipped)",
            report.faces_built,
            report.buildings,
            report.room_types,
            report.faces_failed()
        );

        report
    }

    /// Destroy every root node. Calling this again is a no-op.
    pub fn release<H>(&mut self, host: &mut H)
    where
        H: MeshHost<Handle = T>,
    {
        if self.roots.is_empty() {
            return;
        }

        tracing::debug!("Releasing {} root nodes", self.roots.len());
        for root in self.roots.drain(..) {
            host.destroy(root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn test_face_node_name() {
        assert_eq!(face_node_name(3), "RoomTypes 3");
    }

    #[test]
    fn test_unsuccessful_response_builds_nothing() {
        let response = Response {
            success: false,
            code: 500,
            data: vec![Default::default()],
        };
        let mut host = RecordingHost::new();
        let mut construction = Construction::new();

        let report = construction.build(&response, &mut host, &"base".to_owned());

        assert!(construction.is_empty());
        assert!(host.is_empty());
        assert_eq!(report, ConstructionReport::default());
    }

    #[test]
    fn test_release_twice_is_noop() {
        let response = Response {
            success: true,
            code: 200,
            data: vec![Default::default()],
        };
        let mut host = RecordingHost::new();
        let mut construction = Construction::new();

        // A building with no room types creates no roots.
        construction.build(&response, &mut host, &"base".to_owned());
        construction.release(&mut host);
        construction.release(&mut host);
        assert!(host.is_empty());
    }
}
