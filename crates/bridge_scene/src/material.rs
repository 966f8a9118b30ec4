//! Surface materials

use serde::{Deserialize, Serialize};

use crate::texture::{TextureId, NO_TEXTURE};

/// RGB color
pub type Color3f = [f32; 3];
/// RGBA color
pub type Color4f = [f32; 4];

/// Diffuse/specular material with an optional diffuse texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse color (RGBA)
    pub diffuse: Color4f,
    /// Specular color (RGB)
    pub specular: Color3f,
    /// Registered diffuse texture, [`NO_TEXTURE`] if none
    pub diffuse_texture: TextureId,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: [1.0, 1.0, 1.0, 1.0],
            specular: [0.0, 0.0, 0.0],
            diffuse_texture: NO_TEXTURE,
        }
    }
}

impl Material {
    pub fn new(diffuse: Color4f, specular: Color3f, diffuse_texture: TextureId) -> Self {
        Self {
            diffuse,
            specular,
            diffuse_texture,
        }
    }

    pub fn has_texture(&self) -> bool {
        self.diffuse_texture != NO_TEXTURE
    }

    /// Texture id, `None` for the sentinel
    pub fn texture(&self) -> Option<TextureId> {
        self.has_texture().then_some(self.diffuse_texture)
    }

    pub fn is_transparent(&self) -> bool {
        self.diffuse[3] < 1.0
    }
}
