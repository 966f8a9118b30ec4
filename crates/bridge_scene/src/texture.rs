//! Texture references and the registry seam

use serde::{Deserialize, Serialize};

/// Stable integer id handed out by a texture registry
pub type TextureId = i32;

/// Sentinel id meaning "no texture"
pub const NO_TEXTURE: TextureId = -1;

/// A texture known to the scene graph by its file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Texture {
    pub filename: String,
}

impl Texture {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// Anything that can assign stable ids to textures.
///
/// Registering a texture whose filename is already known must return the
/// id handed out the first time.
pub trait TextureRegistry {
    fn register_texture(&mut self, texture: Texture) -> TextureId;
}

impl<R: TextureRegistry + ?Sized> TextureRegistry for &mut R {
    fn register_texture(&mut self, texture: Texture) -> TextureId {
        (**self).register_texture(texture)
    }
}
