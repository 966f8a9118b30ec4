//! Scene graph: texture registry plus per-link nodes

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::shape::Shape;
use crate::texture::{Texture, TextureId, TextureRegistry};

/// Identifier of a node in the scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

/// Visual shapes of one simulated link
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    /// Simulator body unique id
    pub body: i32,
    /// Link index within the body, -1 for the base
    pub link: i32,
    pub shapes: Vec<Shape>,
}

impl SceneNode {
    pub fn new(body: i32, link: i32, shapes: Vec<Shape>) -> Self {
        Self { body, link, shapes }
    }
}

/// Scene graph owning textures and nodes
#[derive(Debug, Default)]
pub struct SceneGraph {
    textures: Vec<Texture>,
    texture_ids: HashMap<String, TextureId>,
    nodes: BTreeMap<NodeId, SceneNode>,
    next_node_id: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture, reusing the id of an already known filename
    pub fn register_texture(&mut self, texture: Texture) -> TextureId {
        if let Some(&id) = self.texture_ids.get(&texture.filename) {
            return id;
        }
        let id = self.textures.len() as TextureId;
        log::trace!("Registered texture {} as {}", texture.filename, id);
        self.texture_ids.insert(texture.filename.clone(), id);
        self.textures.push(texture);
        id
    }

    /// Look up a texture by id
    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        usize::try_from(id).ok().and_then(|i| self.textures.get(i))
    }

    /// Id previously assigned to a filename
    pub fn texture_id(&self, filename: &str) -> Option<TextureId> {
        self.texture_ids.get(filename).copied()
    }

    /// All registered textures, indexed by id
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Add a node and return its id
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        log::debug!(
            "Added scene node {:?} (body {}, link {}, {} shapes)",
            id,
            node.body,
            node.link,
            node.shapes.len()
        );
        self.nodes.insert(id, node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(&id)
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Nodes belonging to a body
    pub fn nodes_for_body(&self, body: i32) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes().filter(move |(_, node)| node.body == body)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Remove every node of a body, returning how many were removed.
    /// Textures stay registered so their ids remain stable.
    pub fn remove_body(&mut self, body: i32) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|_, node| node.body != body);
        let removed = before - self.nodes.len();
        if removed > 0 {
            log::debug!("Removed {} scene nodes of body {}", removed, body);
        }
        removed
    }

    /// Drop all nodes and textures
    pub fn clear(&mut self) {
        self.textures.clear();
        self.texture_ids.clear();
        self.nodes.clear();
    }
}

impl TextureRegistry for SceneGraph {
    fn register_texture(&mut self, texture: Texture) -> TextureId {
        SceneGraph::register_texture(self, texture)
    }
}

/// Scene graph shared between the simulation thread and a renderer
#[derive(Debug, Clone, Default)]
pub struct SharedSceneGraph(Arc<RwLock<SceneGraph>>);

impl SharedSceneGraph {
    pub fn new(graph: SceneGraph) -> Self {
        Self(Arc::new(RwLock::new(graph)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SceneGraph> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, SceneGraph> {
        self.0.write()
    }
}

impl TextureRegistry for SharedSceneGraph {
    fn register_texture(&mut self, texture: Texture) -> TextureId {
        self.0.write().register_texture(texture)
    }
}
