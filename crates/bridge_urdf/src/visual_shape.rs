//! Visual-shape query record.
//!
//! [`VisualShapeData`] is read byte-for-byte by clients of the simulator's
//! shared-memory protocol. Its field order, sizes and padding must stay as
//! they are.

use std::borrow::Cow;
use std::fmt;

use bridge_math::RigidTransform;
use bytemuck::{Pod, Zeroable};

use crate::config::ConverterConfig;
use crate::types::{UrdfMaterial, UrdfShape};

/// Capacity of the mesh asset file name field, terminator included
pub const VISUAL_SHAPE_MAX_PATH_LEN: usize = 1024;

/// Texture id meaning "not uploaded"
const NO_TEXTURE_ID: i32 = -1;

/// Fixed-layout visual shape description
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VisualShapeData {
    pub object_unique_id: i32,
    pub link_index: i32,
    pub visual_geometry_type: i32,
    _pad0: i32,
    pub dimensions: [f64; 3],
    /// NUL-terminated file name
    pub mesh_asset_file_name: [u8; VISUAL_SHAPE_MAX_PATH_LEN],
    /// Position `[x, y, z]` then orientation `[x, y, z, w]`
    pub local_visual_frame: [f64; 7],
    pub rgba_color: [f64; 4],
    pub tiny_renderer_texture_id: i32,
    pub texture_unique_id: i32,
    pub opengl_texture_id: i32,
    _pad1: i32,
}

const _: () = assert!(core::mem::size_of::<VisualShapeData>() == 1168);

impl Default for VisualShapeData {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl VisualShapeData {
    /// The record as sent over the wire
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Mesh asset file name up to the first NUL
    pub fn mesh_asset_file_name(&self) -> Cow<'_, str> {
        let end = self
            .mesh_asset_file_name
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(VISUAL_SHAPE_MAX_PATH_LEN);
        String::from_utf8_lossy(&self.mesh_asset_file_name[..end])
    }

    /// Copy a file name into the fixed field.
    ///
    /// Copying stops at the first NUL of `name` and after
    /// `VISUAL_SHAPE_MAX_PATH_LEN - 1` bytes; the rest of the field is zeroed.
    pub fn set_mesh_asset_file_name(&mut self, name: &str) {
        let bytes = name.as_bytes();
        let len = bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(bytes.len())
            .min(VISUAL_SHAPE_MAX_PATH_LEN - 1);
        self.mesh_asset_file_name[..len].copy_from_slice(&bytes[..len]);
        self.mesh_asset_file_name[len..].fill(0);
    }
}

impl fmt::Debug for VisualShapeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisualShapeData")
            .field("object_unique_id", &self.object_unique_id)
            .field("link_index", &self.link_index)
            .field("visual_geometry_type", &self.visual_geometry_type)
            .field("dimensions", &self.dimensions)
            .field("mesh_asset_file_name", &self.mesh_asset_file_name())
            .field("local_visual_frame", &self.local_visual_frame)
            .field("rgba_color", &self.rgba_color)
            .field("tiny_renderer_texture_id", &self.tiny_renderer_texture_id)
            .field("texture_unique_id", &self.texture_unique_id)
            .field("opengl_texture_id", &self.opengl_texture_id)
            .finish()
    }
}

/// Fill a visual-shape record with the default configuration.
///
/// See [`make_visual_shape_data_with`].
pub fn make_visual_shape_data(
    shape: &UrdfShape,
    material: &UrdfMaterial,
    local_inertia_frame: &RigidTransform,
    body_unique_id: i32,
    link_index: i32,
) -> VisualShapeData {
    make_visual_shape_data_with(
        shape,
        material,
        local_inertia_frame,
        body_unique_id,
        link_index,
        &ConverterConfig::default(),
    )
}

/// Fill a visual-shape record for the simulator's query API.
///
/// Independent of the scene shape built from the same inputs: the frame is
/// the local inertia frame as given, and the file name field carries the
/// material's texture file. Texture ids are always -1 since textures are
/// uploaded elsewhere.
pub fn make_visual_shape_data_with(
    shape: &UrdfShape,
    material: &UrdfMaterial,
    local_inertia_frame: &RigidTransform,
    body_unique_id: i32,
    link_index: i32,
    config: &ConverterConfig,
) -> VisualShapeData {
    let mut data = VisualShapeData::zeroed();

    data.object_unique_id = body_unique_id;
    data.link_index = link_index;

    let origin = local_inertia_frame.origin;
    let rotation = local_inertia_frame.rotation;
    data.local_visual_frame = [
        origin.x, origin.y, origin.z, rotation.x, rotation.y, rotation.z, rotation.w,
    ];

    let geometry = &shape.geometry;
    data.visual_geometry_type = geometry.geom_type.raw();

    // Existing clients receive the X mesh scale in all three slots.
    let scale = geometry.mesh_scale;
    data.dimensions = if config.per_axis_dimensions {
        scale.to_array()
    } else {
        [scale.x; 3]
    };

    data.rgba_color = material.color.rgba;
    data.set_mesh_asset_file_name(&material.texture_filename);

    data.tiny_renderer_texture_id = NO_TEXTURE_ID;
    data.texture_unique_id = NO_TEXTURE_ID;
    data.opengl_texture_id = NO_TEXTURE_ID;

    data
}
