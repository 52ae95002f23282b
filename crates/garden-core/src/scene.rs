//! Arena scene graph shared by picking, animation and garden generation.
//!
//! Nodes live in a flat vector and refer to each other by [`NodeId`]. A child
//! keeps a plain index back to its parent, so walking "up" the ownership chain
//! never touches reference counts. Memory payloads sit in a side table keyed
//! by id and may only be attached to top-level groups.

use crate::error::SceneError;
use crate::memory::MemoryPayload;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local placement of a node relative to its parent.
///
/// Rotation is Euler XYZ in radians, applied before translation and after
/// scale, the usual scene-graph convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }
}

/// Geometry used for hit testing, expressed in the node's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    Cuboid { size: Vec3 },
    /// Axis along local Y, centred on the origin.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    /// Lies in local XY and faces +Z.
    Plane { width: f32, height: f32 },
    /// Tested as its circumscribed sphere.
    Dodecahedron { radius: f32 },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Cuboid { .. } => "cuboid",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Plane { .. } => "plane",
            Shape::Dodecahedron { .. } => "dodecahedron",
        }
    }

    /// Size parameters packed for a renderer, unused slots zero.
    ///
    /// sphere/dodecahedron `[radius, 0, 0]`, cuboid `[x, y, z]`,
    /// cylinder `[radius_top, radius_bottom, height]`, plane `[width, height, 0]`.
    pub fn dimensions(&self) -> [f32; 3] {
        match *self {
            Shape::Sphere { radius } | Shape::Dodecahedron { radius } => [radius, 0.0, 0.0],
            Shape::Cuboid { size } => size.to_array(),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => [radius_top, radius_bottom, height],
            Shape::Plane { width, height } => [width, height, 0.0],
        }
    }
}

/// One visible shaped node placed in world space.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    pub node: NodeId,
    pub name: &'static str,
    pub shape: Shape,
    pub world: Mat4,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: &'static str,
    pub transform: Transform,
    pub shape: Option<Shape>,
    pub visible: bool,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 8]>,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    payloads: FnvHashMap<NodeId, MemoryPayload>,
    interactive: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a node without a parent.
    pub fn add_root(&mut self, name: &'static str, transform: Transform, shape: Option<Shape>) -> NodeId {
        self.push(name, transform, shape, None)
    }

    /// Add a node under `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: &'static str,
        transform: Transform,
        shape: Option<Shape>,
    ) -> Result<NodeId, SceneError> {
        if self.nodes.get(parent.index()).is_none() {
            return Err(SceneError::UnknownNode(parent));
        }
        let id = self.push(name, transform, shape, Some(parent));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn push(
        &mut self,
        name: &'static str,
        transform: Transform,
        shape: Option<Shape>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name,
            transform,
            shape,
            visible: true,
            parent,
            children: SmallVec::new(),
        });
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Attach a memory to a top-level group. Payloads are immutable once set;
    /// attaching again replaces the slot wholesale.
    pub fn attach_payload(&mut self, id: NodeId, payload: MemoryPayload) -> Result<(), SceneError> {
        let node = self.node(id).ok_or(SceneError::UnknownNode(id))?;
        if node.parent.is_some() {
            return Err(SceneError::PayloadOnChild(id));
        }
        self.payloads.insert(id, payload);
        Ok(())
    }

    pub fn payload(&self, id: NodeId) -> Option<&MemoryPayload> {
        self.payloads.get(&id)
    }

    /// Register a root as eligible for hit testing.
    pub fn mark_interactive(&mut self, id: NodeId) -> Result<(), SceneError> {
        if self.node(id).is_none() {
            return Err(SceneError::UnknownNode(id));
        }
        if !self.interactive.contains(&id) {
            self.interactive.push(id);
        }
        Ok(())
    }

    pub fn interactive(&self) -> &[NodeId] {
        &self.interactive
    }

    /// Local-to-world matrix, composed up the parent chain.
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        let mut cur = Some(id);
        while let Some(c) = cur {
            let Some(node) = self.node(c) else { break };
            m = node.transform.matrix() * m;
            cur = node.parent;
        }
        m
    }

    /// Walk from `id` towards the root and return the first node that carries
    /// a memory. `None` once the chain runs out.
    pub fn resolve_payload(&self, id: NodeId) -> Option<(NodeId, &MemoryPayload)> {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if let Some(p) = self.payloads.get(&c) {
                return Some((c, p));
            }
            cur = self.parent(c);
        }
        None
    }

    /// Every visible shaped node with its world matrix, parents before
    /// children. A hidden node hides its whole subtree, as in picking.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, Mat4)> = (0..self.nodes.len() as u32)
            .rev()
            .map(NodeId)
            .filter(|&id| self.parent(id).is_none())
            .map(|id| (id, Mat4::IDENTITY))
            .collect();
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if !node.visible {
                continue;
            }
            let world = parent_world * node.transform.matrix();
            if let Some(shape) = node.shape {
                out.push(DrawItem {
                    node: id,
                    name: node.name,
                    shape,
                    world,
                });
            }
            stack.extend(node.children().iter().rev().map(|&c| (c, world)));
        }
        out
    }
}
