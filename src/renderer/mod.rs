//! Rendering contract
//!
//! The sim knows nothing about pixels. It hands the renderer opaque texture
//! handles, destination boxes and rotation angles; a backend does the rest.

pub mod scene;

pub use scene::draw_scene;

use crate::sim::Rect;

/// Opaque texture handle issued by a texture loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: TextureHandle,
    /// Region of the texture to draw (None = whole texture)
    pub source: Option<Rect>,
    /// Destination box in arena coordinates
    pub dest: Rect,
    /// Rotation about the box center (degrees, clockwise)
    pub rotation: f32,
}

/// Drawing backend
pub trait Renderer {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: &Sprite);
    fn present(&mut self);
}
