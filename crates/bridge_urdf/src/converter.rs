//! Per-link conversion into the scene graph

use bridge_math::RigidTransform;
use bridge_scene::{NodeId, SceneGraph, SceneNode, Shape, TextureRegistry};

use crate::config::ConverterConfig;
use crate::shape::make_shape_with;
use crate::types::{UrdfFlags, UrdfVisual};
use crate::visual_shape::{make_visual_shape_data_with, VisualShapeData};

/// Result of converting one link
#[derive(Debug, Clone)]
pub struct ConvertedLink {
    /// Scene node holding the link's shapes
    pub node: NodeId,
    /// One query record per visual, in input order
    pub visual_shapes: Vec<VisualShapeData>,
}

/// Converts simulator visuals with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct VisualConverter {
    config: ConverterConfig,
}

impl VisualConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert one visual into a scene shape
    pub fn convert_shape<R>(
        &self,
        visual: &UrdfVisual,
        local_inertia_frame: &RigidTransform,
        flags: UrdfFlags,
        registry: &mut R,
    ) -> Shape
    where
        R: TextureRegistry + ?Sized,
    {
        let shape = make_shape_with(
            &visual.shape,
            &visual.material,
            local_inertia_frame,
            flags,
            registry,
            &self.config,
        );
        log::debug!(
            "Converted visual '{}' (type {}) to {:?}",
            visual.shape.name,
            visual.shape.geometry.geom_type.raw(),
            shape.kind
        );
        shape
    }

    /// Fill the query record for one visual
    pub fn convert_visual_shape_data(
        &self,
        visual: &UrdfVisual,
        local_inertia_frame: &RigidTransform,
        body_unique_id: i32,
        link_index: i32,
    ) -> VisualShapeData {
        make_visual_shape_data_with(
            &visual.shape,
            &visual.material,
            local_inertia_frame,
            body_unique_id,
            link_index,
            &self.config,
        )
    }

    /// Convert every visual of a link, add them to `graph` as one node and
    /// return the node together with the query records.
    ///
    /// Query records are produced for every visual, including those whose
    /// shape is left out of the node by `skip_empty_shapes`.
    pub fn convert_link(
        &self,
        visuals: &[UrdfVisual],
        local_inertia_frame: &RigidTransform,
        flags: UrdfFlags,
        body_unique_id: i32,
        link_index: i32,
        graph: &mut SceneGraph,
    ) -> ConvertedLink {
        let mut shapes = Vec::with_capacity(visuals.len());
        let mut visual_shapes = Vec::with_capacity(visuals.len());

        for visual in visuals {
            let shape = self.convert_shape(visual, local_inertia_frame, flags, graph);
            if !(self.config.skip_empty_shapes && shape.is_empty()) {
                shapes.push(shape);
            }
            visual_shapes.push(self.convert_visual_shape_data(
                visual,
                local_inertia_frame,
                body_unique_id,
                link_index,
            ));
        }

        let node = graph.add_node(SceneNode::new(body_unique_id, link_index, shapes));
        ConvertedLink {
            node,
            visual_shapes,
        }
    }
}
