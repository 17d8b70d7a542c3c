//! Scene host abstraction.
//!
//! The construction pass never touches a concrete scene graph. It drives a
//! [`MeshHost`], which creates nodes, attaches geometry and materials, and
//! destroys nodes on teardown.
//!
//! # Implementations
//!
//! - [`RecordingHost`]: In-memory host that records every node (tests, tooling)
//! - `footprint-viewer` provides a Bevy-backed host

use std::collections::HashMap;

use footprint_decode::{FaceGeometry, TileScale};

/// Capability interface over a host scene graph.
pub trait MeshHost {
    /// Identifies a node created by this host.
    type Handle: Clone;
    /// Base material that per-face material instances are derived from.
    type Material;

    /// Create a named node, optionally parented to an existing one.
    fn create_child(&mut self, parent: Option<&Self::Handle>, name: &str) -> Self::Handle;

    /// Attach vertex, index and UV buffers to a node.
    fn attach_geometry(&mut self, handle: &Self::Handle, geometry: &FaceGeometry);

    /// Attach an instance of `material` tiled by `tile_scale` to a node.
    fn attach_material(
        &mut self,
        handle: &Self::Handle,
        material: &Self::Material,
        tile_scale: TileScale,
    );

    /// Destroy a node and everything beneath it.
    fn destroy(&mut self, handle: Self::Handle);
}

/// Index of a node in a [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node recorded by [`RecordingHost`].
#[derive(Debug, Clone)]
pub struct RecordedNode {
    /// Node name.
    pub name: String,
    /// Parent node, if any.
    pub parent: Option<NodeId>,
    /// Attached geometry.
    pub geometry: Option<FaceGeometry>,
    /// Material name and tile scale of the attached material instance.
    pub material: Option<(String, TileScale)>,
}

/// A host that keeps every node in memory.
///
/// Materials are identified by name. Destroyed nodes (and their
/// descendants) are removed from [`RecordingHost::live_nodes`].
///
/// Node ids are never reused: a destroyed node leaves an empty slot behind,
/// so storage grows with every node ever created. Children are indexed per
/// parent, so destroying a subtree only visits that subtree.
#[derive(Debug, Default)]
pub struct RecordingHost {
    nodes: Vec<Option<RecordedNode>>,
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl RecordingHost {
    /// Create an empty host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a live node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&RecordedNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// All live nodes in creation order.
    pub fn live_nodes(&self) -> impl Iterator<Item = (NodeId, &RecordedNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| node.as_ref().map(|node| (NodeId(i), node)))
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_nodes().count()
    }

    /// Whether no nodes are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live children of `parent`, in creation order.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = (NodeId, &RecordedNode)> {
        self.children
            .get(&parent)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.node(id).map(|node| (id, node)))
    }

    /// Number of slots ever allocated, live or destroyed.
    #[must_use]
    pub fn capacity_used(&self) -> usize {
        self.nodes.len()
    }

    /// Live nodes without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = (NodeId, &RecordedNode)> {
        self.live_nodes().filter(|(_, node)| node.parent.is_none())
    }
}

impl MeshHost for RecordingHost {
    type Handle = NodeId;
    type Material = String;

    fn create_child(&mut self, parent: Option<&NodeId>, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(RecordedNode {
            name: name.to_owned(),
            parent: parent.copied(),
            geometry: None,
            material: None,
        }));
        if let Some(&parent) = parent {
            self.children.entry(parent).or_default().push(id);
        }
        id
    }

    fn attach_geometry(&mut self, handle: &NodeId, geometry: &FaceGeometry) {
        if let Some(Some(node)) = self.nodes.get_mut(handle.0) {
            node.geometry = Some(geometry.clone());
        }
    }

    fn attach_material(&mut self, handle: &NodeId, material: &String, tile_scale: TileScale) {
        if let Some(Some(node)) = self.nodes.get_mut(handle.0) {
            node.material = Some((material.clone(), tile_scale));
        }
    }

    fn destroy(&mut self, handle: NodeId) {
        let Some(node) = self.nodes.get_mut(handle.0).and_then(Option::take) else {
            return;
        };

        if let Some(parent) = node.parent
            && let Some(siblings) = self.children.get_mut(&parent)
        {
            siblings.retain(|&id| id != handle);
        }

        let mut pending = self.children.remove(&handle).unwrap_or_default();
        while let Some(id) = pending.pop() {
            if let Some(slot) = self.nodes.get_mut(id.0) {
                *slot = None;
            }
            if let Some(grandchildren) = self.children.remove(&id) {
                pending.extend(grandchildren);
            }
        }
    }
}
